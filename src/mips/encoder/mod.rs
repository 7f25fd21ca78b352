// mips/encoder/mod.rs
use crate::mips::errors::EncodeError;
use crate::mips::instruction::Instruction;

#[inline] fn r(rs:u32, rt:u32, rd:u32, shamt:u32, funct:u32) -> u32 {
    (rs<<21) | (rt<<16) | (rd<<11) | (shamt<<6) | funct
}
#[inline] fn i(opc:u32, rs:u32, rt:u32, imm16:u32) -> u32 {
    (opc<<26) | (rs<<21) | (rt<<16) | imm16
}
#[inline] fn j(opc:u32, addr26:u32) -> u32 {
    (opc<<26) | addr26
}

fn imm16(imm: i32) -> Result<u32, EncodeError> {
    i16::try_from(imm)
        .map(|v| v as u16 as u32)
        .map_err(|_| EncodeError::ImmediateRange(imm))
}

/// Packs an instruction into its 32-bit machine word.
pub fn encode(inst: &Instruction) -> Result<u32, EncodeError> {
    use Instruction::*;
    Ok(match *inst {
        Register{function,rd,rs,rt} =>
            r(rs.index() as u32, rt.index() as u32, rd.index() as u32, 0, function.code() as u32),
        ImmediateArith{op,rs,rt,immediate} =>
            i(op.opcode() as u32, rs.index() as u32, rt.index() as u32, imm16(immediate)?),
        ImmediateMem{op,rs,rt,immediate} =>
            i(op.opcode() as u32, rs.index() as u32, rt.index() as u32, imm16(immediate)?),
        Jump{op,address} => {
            if address >= 1 << 26 { return Err(EncodeError::AddressRange(address)); }
            j(op.opcode() as u32, address)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mips::decoder::decode;

    fn word(line: &str) -> u32 {
        encode(&decode(line).expect("decode")).expect("encode")
    }

    #[test]
    fn r_type_words() {
        assert_eq!(word("add $1,$2,$3"), 0x0043_0820);
        assert_eq!(word("slt $8,$9,$10"), 0x012A_402A);
        assert_eq!(word("jr $31"), 0x03E0_0008);
    }

    #[test]
    fn i_type_words() {
        assert_eq!(word("addi $1,$2,1"), 0x2041_0001);
        assert_eq!(word("lw $2,4($0)"), 0x8C02_0004);
        assert_eq!(word("beq $1,$2,-1"), 0x1041_FFFF);
    }

    #[test]
    fn j_type_words() {
        assert_eq!(word("j 10"), 0x0800_000A);
        assert_eq!(word("jal 10"), 0x0C00_000A);
    }

    #[test]
    fn out_of_field_values_are_refused() {
        let big = decode("addi $1,$2,40000").expect("decode");
        assert_eq!(encode(&big), Err(EncodeError::ImmediateRange(40000)));
        let far = decode("j 67108864").expect("decode");
        assert_eq!(encode(&far), Err(EncodeError::AddressRange(67_108_864)));
    }
}
