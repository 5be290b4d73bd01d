// Interactive CPU debugger
//
// A line-oriented REPL observing a CPU through its public surface:
// register snapshots, memory peeks, single steps and the cycle counter.
//
// Commands: step/s/n/next, continue/c, registers/r, break/b <addr>,
// deletebreak/db <addr>, listbreaks/lb, disassemble/d <addr> [count],
// examine/x <addr> [bytes], quit/q. Addresses are decimal or 0x-hex.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

use super::disassembler::{disassemble_count, disassemble_instruction};
use crate::bus::CpuBus;
use crate::cpu::{flags, Cpu};

/// Result of one debugger command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Okay,
    Error,
    Halt,
}

/// Interactive debugger over a CPU.
pub struct CpuDebugger<'a, B: CpuBus> {
    cpu: &'a mut Cpu<B>,
    breakpoints: BTreeSet<u16>,
}

/// Parse a decimal or `0x`-prefixed hexadecimal address.
fn parse_address(text: &str) -> Option<u16> {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u16::from_str_radix(hex, 16).ok()
    } else {
        text.parse().ok()
    }
}

impl<'a, B: CpuBus> CpuDebugger<'a, B> {
    pub fn new(cpu: &'a mut Cpu<B>) -> Self {
        CpuDebugger {
            cpu,
            breakpoints: BTreeSet::new(),
        }
    }

    /// Run the prompt loop over stdin until `quit` or a CPU halt.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("[0x{:04x}]> ", self.cpu.registers().pc);
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                return Ok(()); // EOF
            };

            if self.execute_command(&line?) == CommandOutcome::Halt {
                return Ok(());
            }
        }
    }

    /// Dispatch one command line.
    pub fn execute_command(&mut self, line: &str) -> CommandOutcome {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            eprintln!("'{}' is not a valid command", line);
            return CommandOutcome::Error;
        };
        let args: Vec<&str> = parts.collect();

        match command {
            "s" | "step" | "n" | "next" => self.command_step(&args),
            "c" | "continue" => self.command_continue(&args),
            "r" | "registers" => self.command_registers(&args),
            "b" | "break" => self.command_set_breakpoint(&args),
            "db" | "deletebreak" => self.command_remove_breakpoint(&args),
            "lb" | "listbreaks" => self.command_list_breakpoints(&args),
            "d" | "disassemble" => self.command_disassemble(&args),
            "x" | "examine" => self.command_examine(&args),
            "q" | "quit" => CommandOutcome::Halt,
            _ => {
                eprintln!("'{}' is not a valid command", command);
                CommandOutcome::Error
            }
        }
    }

    pub fn breakpoints(&self) -> &BTreeSet<u16> {
        &self.breakpoints
    }

    fn command_step(&mut self, args: &[&str]) -> CommandOutcome {
        if !args.is_empty() {
            eprintln!("This command takes 0 arguments");
            return CommandOutcome::Error;
        }

        match self.cpu.execute_instruction() {
            Ok(_) => CommandOutcome::Okay,
            Err(e) => {
                eprintln!("CPU halt: {}", e);
                CommandOutcome::Halt
            }
        }
    }

    fn command_continue(&mut self, args: &[&str]) -> CommandOutcome {
        if !args.is_empty() {
            eprintln!("This command takes 0 arguments");
            return CommandOutcome::Error;
        }

        loop {
            let previous_pc = self.cpu.registers().pc;

            if let Err(e) = self.cpu.execute_instruction() {
                eprintln!("CPU halt: {}", e);
                return CommandOutcome::Halt;
            }

            let pc = self.cpu.registers().pc;
            if pc == previous_pc {
                eprintln!("Infinite loop detected");
                return CommandOutcome::Error;
            }
            if self.breakpoints.contains(&pc) {
                println!("Hit breakpoint");
                return CommandOutcome::Okay;
            }
        }
    }

    fn command_registers(&mut self, args: &[&str]) -> CommandOutcome {
        if !args.is_empty() {
            eprintln!("This command takes 0 arguments");
            return CommandOutcome::Error;
        }

        print!("{}", self.dump_registers());
        CommandOutcome::Okay
    }

    /// Format the register file, the status bits spelled out.
    pub fn dump_registers(&self) -> String {
        let regs = self.cpu.registers();
        let mut output = String::new();

        output.push_str(&format!("PC: ${:04X}\n", regs.pc));
        output.push_str(&format!("A:  ${:02X} ({})\n", regs.a, regs.a));
        output.push_str(&format!("X:  ${:02X} ({})\n", regs.x, regs.x));
        output.push_str(&format!("Y:  ${:02X} ({})\n", regs.y, regs.y));
        output.push_str(&format!("SP: ${:02X}\n", regs.sp));
        output.push_str(&format!("P:  ${:02X} [", regs.status));

        let bits = [
            (flags::NEGATIVE, 'N'),
            (flags::OVERFLOW, 'V'),
            (flags::B2, '-'),
            (flags::B1, 'B'),
            (flags::DECIMAL, 'D'),
            (flags::INTERRUPT_DISABLE, 'I'),
            (flags::ZERO, 'Z'),
            (flags::CARRY, 'C'),
        ];
        for (flag, letter) in bits {
            if regs.status & flag != 0 {
                output.push(letter);
            } else {
                output.push(letter.to_ascii_lowercase());
            }
        }
        output.push_str("]\n");
        output.push_str(&format!("Cycles: {}\n", self.cpu.cycles()));

        output
    }

    fn command_set_breakpoint(&mut self, args: &[&str]) -> CommandOutcome {
        let [arg] = args else {
            eprintln!("This command takes 1 argument");
            return CommandOutcome::Error;
        };
        let Some(address) = parse_address(arg) else {
            eprintln!("Argument is not a valid address");
            return CommandOutcome::Error;
        };

        self.breakpoints.insert(address);
        println!("Added breakpoint at 0x{:04x}", address);
        CommandOutcome::Okay
    }

    fn command_remove_breakpoint(&mut self, args: &[&str]) -> CommandOutcome {
        let [arg] = args else {
            eprintln!("This command takes 1 argument");
            return CommandOutcome::Error;
        };
        let Some(address) = parse_address(arg) else {
            eprintln!("Argument is not a valid address");
            return CommandOutcome::Error;
        };

        self.breakpoints.remove(&address);
        println!("Deleted breakpoint at 0x{:04x}", address);
        CommandOutcome::Okay
    }

    fn command_list_breakpoints(&mut self, args: &[&str]) -> CommandOutcome {
        if !args.is_empty() {
            eprintln!("This command takes 0 arguments");
            return CommandOutcome::Error;
        }

        if self.breakpoints.is_empty() {
            println!("No breakpoints are currently set");
            return CommandOutcome::Okay;
        }

        println!("\nBreakpoints\n-----------");
        for breakpoint in &self.breakpoints {
            println!("0x{:04x}", breakpoint);
        }
        println!();
        CommandOutcome::Okay
    }

    fn command_disassemble(&mut self, args: &[&str]) -> CommandOutcome {
        let (address_arg, count) = match args {
            [address] => (*address, 1usize),
            [address, count] => {
                let Some(count) = parse_address(count) else {
                    eprintln!("Argument is not a number");
                    return CommandOutcome::Error;
                };
                (*address, count as usize)
            }
            _ => {
                eprintln!("This command takes 1 or 2 arguments");
                return CommandOutcome::Error;
            }
        };

        let Some(address) = parse_address(address_arg) else {
            eprintln!("Argument is not a valid address");
            return CommandOutcome::Error;
        };

        for instruction in disassemble_count(address, count, self.cpu.bus_mut()) {
            println!("{}", instruction);
        }
        CommandOutcome::Okay
    }

    fn command_examine(&mut self, args: &[&str]) -> CommandOutcome {
        let (address_arg, count) = match args {
            [address] => (*address, 1u16),
            [address, count] => {
                let Some(count) = parse_address(count) else {
                    eprintln!("Argument is not a number");
                    return CommandOutcome::Error;
                };
                (*address, count)
            }
            _ => {
                eprintln!("This command takes 1 or 2 arguments");
                return CommandOutcome::Error;
            }
        };

        let Some(address) = parse_address(address_arg) else {
            eprintln!("Argument is not a valid address");
            return CommandOutcome::Error;
        };

        for row_start in (0..count).step_by(16) {
            print!("${:04X}: ", address.wrapping_add(row_start));
            for offset in row_start..(row_start + 16).min(count) {
                let value = self.cpu.bus_mut().read_byte(address.wrapping_add(offset));
                print!("{:02X} ", value);
            }
            println!();
        }
        CommandOutcome::Okay
    }

    /// Disassemble the instruction at the current PC.
    pub fn current_instruction(&mut self) -> String {
        let pc = self.cpu.registers().pc;
        disassemble_instruction(pc, self.cpu.bus_mut()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ram::Ram;

    fn cpu_with_program(program: &[u8]) -> Cpu<Ram> {
        let mut ram = Ram::new();
        ram.load(0x0400, program);
        Cpu::new(ram, 0x0400)
    }

    #[test]
    fn parse_address_accepts_decimal_and_hex() {
        assert_eq!(parse_address("1234"), Some(1234));
        assert_eq!(parse_address("0x1F"), Some(0x1F));
        assert_eq!(parse_address("0XFFFF"), Some(0xFFFF));
        assert_eq!(parse_address("zzz"), None);
        assert_eq!(parse_address("0x10000"), None);
    }

    #[test]
    fn step_advances_one_instruction() {
        let mut cpu = cpu_with_program(&[0xA9, 0x42, 0xEA]);
        let mut debugger = CpuDebugger::new(&mut cpu);

        assert_eq!(debugger.execute_command("step"), CommandOutcome::Okay);
        assert_eq!(debugger.cpu.registers().pc, 0x0402);
        assert_eq!(debugger.cpu.registers().a, 0x42);
    }

    #[test]
    fn step_aliases_are_equivalent() {
        for alias in ["s", "step", "n", "next"] {
            let mut cpu = cpu_with_program(&[0xEA]);
            let mut debugger = CpuDebugger::new(&mut cpu);
            assert_eq!(debugger.execute_command(alias), CommandOutcome::Okay);
            assert_eq!(debugger.cpu.registers().pc, 0x0401);
        }
    }

    #[test]
    fn step_on_invalid_opcode_halts() {
        let mut cpu = cpu_with_program(&[0x02]);
        let mut debugger = CpuDebugger::new(&mut cpu);
        assert_eq!(debugger.execute_command("step"), CommandOutcome::Halt);
    }

    #[test]
    fn breakpoints_are_added_listed_and_removed() {
        let mut cpu = cpu_with_program(&[0xEA]);
        let mut debugger = CpuDebugger::new(&mut cpu);

        assert_eq!(debugger.execute_command("b 0x8000"), CommandOutcome::Okay);
        assert_eq!(debugger.execute_command("break 1024"), CommandOutcome::Okay);
        assert!(debugger.breakpoints().contains(&0x8000));
        assert!(debugger.breakpoints().contains(&0x0400));

        assert_eq!(debugger.execute_command("db 0x8000"), CommandOutcome::Okay);
        assert!(!debugger.breakpoints().contains(&0x8000));

        assert_eq!(debugger.execute_command("lb"), CommandOutcome::Okay);
    }

    #[test]
    fn continue_stops_at_a_breakpoint() {
        // NOPs, then a target instruction
        let mut cpu = cpu_with_program(&[0xEA, 0xEA, 0xEA, 0xA9, 0x01]);
        let mut debugger = CpuDebugger::new(&mut cpu);

        debugger.execute_command("b 0x0403");
        assert_eq!(debugger.execute_command("c"), CommandOutcome::Okay);
        assert_eq!(debugger.cpu.registers().pc, 0x0403);
    }

    #[test]
    fn continue_detects_an_infinite_loop() {
        // JMP $0400 jumps to itself
        let mut cpu = cpu_with_program(&[0x4C, 0x00, 0x04]);
        let mut debugger = CpuDebugger::new(&mut cpu);

        assert_eq!(debugger.execute_command("c"), CommandOutcome::Error);
    }

    #[test]
    fn quit_halts_without_arguments() {
        let mut cpu = cpu_with_program(&[0xEA]);
        let mut debugger = CpuDebugger::new(&mut cpu);
        assert_eq!(debugger.execute_command("q"), CommandOutcome::Halt);
        assert_eq!(debugger.execute_command("quit"), CommandOutcome::Halt);
    }

    #[test]
    fn unknown_commands_and_bad_arguments_error() {
        let mut cpu = cpu_with_program(&[0xEA]);
        let mut debugger = CpuDebugger::new(&mut cpu);

        assert_eq!(debugger.execute_command("frobnicate"), CommandOutcome::Error);
        assert_eq!(debugger.execute_command(""), CommandOutcome::Error);
        assert_eq!(debugger.execute_command("b nope"), CommandOutcome::Error);
        assert_eq!(debugger.execute_command("b"), CommandOutcome::Error);
        assert_eq!(debugger.execute_command("step 1"), CommandOutcome::Error);
    }

    #[test]
    fn register_dump_shows_the_flag_letters() {
        let mut cpu = cpu_with_program(&[0xEA]);
        let debugger = CpuDebugger::new(&mut cpu);

        let dump = debugger.dump_registers();
        assert!(dump.contains("PC: $0400"));
        assert!(dump.contains("SP: $00"));
        assert!(dump.contains("[nv-bdizc]"));
        assert!(dump.contains("Cycles: 0"));
    }

    #[test]
    fn current_instruction_disassembles_at_pc() {
        let mut cpu = cpu_with_program(&[0xA9, 0x42]);
        let mut debugger = CpuDebugger::new(&mut cpu);
        let line = debugger.current_instruction();
        assert!(line.contains("LDA #$42"));
    }
}
