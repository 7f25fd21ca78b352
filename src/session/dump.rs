//! Text renderings of machine state and instructions.

use crate::mips::arch::REGISTER_COUNT;
use crate::mips::encoder::encode;
use crate::mips::instruction::{Format, Instruction};
use crate::mips::machine::MachineState;

const PER_ROW: usize = 4;

/// `$n: value` four to a row, then the pc.
pub fn register_lines(state: &MachineState) -> Vec<String> {
    let regs = state.registers();
    let mut lines: Vec<String> = (0..REGISTER_COUNT)
        .step_by(PER_ROW)
        .map(|row| {
            (row..row + PER_ROW)
                .map(|i| format!("${i:<2}: {:<11}", regs[i]))
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_string()
        })
        .collect();
    lines.push(format!("PC: {}", state.pc()));
    lines
}

/// `[addr]: value` for words `start..=end`, rows broken at multiples of four.
pub fn memory_lines(state: &MachineState, start: usize, end: usize) -> Vec<String> {
    let words = state.memory_words();
    let end = end.min(words.len().saturating_sub(1));
    let mut lines = Vec::new();
    let mut row = String::new();
    for addr in start..=end {
        if addr % PER_ROW == 0 && !row.is_empty() {
            lines.push(std::mem::take(&mut row).trim_end().to_string());
        }
        row.push_str(&format!("[{addr:4}]: {:<11} ", words[addr]));
    }
    if !row.is_empty() {
        lines.push(row.trim_end().to_string());
    }
    lines
}

/// Field breakdown of an instruction, ending with its encoded word.
pub fn instruction_lines(inst: &Instruction) -> Vec<String> {
    let opcode = inst.opcode();
    let mut lines = vec![format_label(inst.format()).to_string()];
    match *inst {
        Instruction::Register { function, rd, rs, rt } => {
            lines.push(format!("opcode: {opcode} (0x{opcode:02X})"));
            lines.push(format!("rs: {rs}"));
            lines.push(format!("rt: {rt}"));
            lines.push(format!("rd: {rd}"));
            lines.push("shamt: 0".to_string());
            let code = function.code();
            lines.push(format!("funct: {code} (0x{code:02X})"));
        }
        Instruction::ImmediateArith { rs, rt, immediate, .. }
        | Instruction::ImmediateMem { rs, rt, immediate, .. } => {
            lines.push(format!("opcode: {opcode} (0x{opcode:02X})"));
            lines.push(format!("rs: {rs}"));
            lines.push(format!("rt: {rt}"));
            lines.push(format!("immediate: {immediate}"));
        }
        Instruction::Jump { address, .. } => {
            lines.push(format!("opcode: {opcode} (0x{opcode:02X})"));
            lines.push(format!("address: {address} (byte {})", address as u64 * 4));
        }
    }
    lines.push(match encode(inst) {
        Ok(word) => format!("word: 0x{word:08X}"),
        Err(e) => format!("word: n/a ({e})"),
    });
    lines
}

pub fn format_label(format: Format) -> &'static str {
    match format {
        Format::R => "R-type",
        Format::I => "I-type",
        Format::J => "J-type",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mips::decoder::decode;

    #[test]
    fn register_dump_has_eight_rows_and_pc() {
        let mut st = MachineState::new();
        st.set_register(5, -12).unwrap();
        let lines = register_lines(&st);
        assert_eq!(lines.len(), 9);
        assert!(lines[1].contains("$5 : -12"));
        assert_eq!(lines[8], "PC: 0");
    }

    #[test]
    fn memory_dump_breaks_rows_on_word_groups() {
        let st = MachineState::new();
        let lines = memory_lines(&st, 2, 9);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("[   2]"));
        assert!(lines[1].starts_with("[   4]"));
        assert!(lines[2].starts_with("[   8]"));
        assert!(lines[2].contains("[   9]"));
    }

    #[test]
    fn instruction_detail_shows_fields_and_word() {
        let lines = instruction_lines(&decode("add $1,$2,$3").unwrap());
        assert_eq!(lines[0], "R-type");
        assert!(lines.contains(&"funct: 32 (0x20)".to_string()));
        assert_eq!(lines.last().unwrap(), "word: 0x00430820");

        let lines = instruction_lines(&decode("j 10").unwrap());
        assert!(lines.contains(&"address: 10 (byte 40)".to_string()));
    }
}
