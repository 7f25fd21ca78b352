pub const HELP: &[&str] = &[
    "Available instructions:",
    "R-type: add, sub, and, or, slt, jr",
    "  format: <op> $rd,$rs,$rt        e.g. add $1,$2,$3 / sub $1,$2,$3",
    "  format: jr $rs                  e.g. jr $31",
    "I-type: addi, lw, sw, beq",
    "  addi $rt,$rs,immediate          e.g. addi $1,$2,100",
    "  lw/sw $rt,offset($rs)           e.g. lw $1,0($2)",
    "  beq $rt,$rs,offset              e.g. beq $1,$2,10 (offset in words from this pc)",
    "J-type: j, jal",
    "  <op> address                    e.g. j 100 (word address, pc becomes address*4)",
    "  the address is an unsigned integer: 'j -1' is a parameter error",
    "",
    "Commands:",
    "  help              show this help",
    "  regs              show registers and pc",
    "  mem <start> <end> show memory words start..=end",
    "  set $r <value>    write a register",
    "  reset             zero registers, memory and pc",
    "  sair | quit       leave",
];
