use super::FormatMode;

pub(super) fn format_word(value: i32, fmt: FormatMode) -> String {
    match fmt {
        FormatMode::Hex => format!("0x{:08x}", value as u32),
        FormatMode::Dec => format!("{value}"),
    }
}

pub(super) fn format_pc(pc: u32, fmt: FormatMode) -> String {
    match fmt {
        FormatMode::Hex => format!("0x{pc:04x}"),
        FormatMode::Dec => format!("{pc}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_words_in_hex_are_twos_complement() {
        assert_eq!(format_word(-1, FormatMode::Hex), "0xffffffff");
        assert_eq!(format_word(-1, FormatMode::Dec), "-1");
        assert_eq!(format_pc(40, FormatMode::Hex), "0x0028");
    }
}
