//! The CPU opcode mnemonics.
//!
//! *depends on BCD flag, not currently supported

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Instruction {
    /// ADd with Carry*
    ADC,
    /// bitwise AND w/ acc
    AND,
    /// Arithmetic Shift Left
    ASL,
    /// test BITs
    BIT,

    //region Branch instructions
    /// Branch on PLus
    BPL,
    /// Branch on MInus
    BMI,
    /// Branch on oVerflow Clear
    BVC,
    /// Branch on oVerflow Set
    BVS,
    /// Branch on Carry Clear
    BCC,
    /// Branch on Carry Set
    BCS,
    /// Branch on Not Equal
    BNE,
    /// Branch on EQual
    BEQ,
    //endregion
    /// BReaK
    BRK,
    /// CoMPare acc
    CMP,
    /// ComPare X
    CPX,
    /// ComPare Y
    CPY,
    /// DECrement
    DEC,
    /// bitwise Exclusive OR
    EOR,

    //region Flag instructions
    /// CLear Carry
    CLC,
    /// SEt Carry
    SEC,
    /// CLear Interrupt mask
    CLI,
    /// SEt Interrupt mask
    SEI,
    /// CLear oVerflow
    CLV,
    /// CLear Decimal
    CLD,
    /// SEt Decimal
    SED,
    //endregion
    /// INCrement memory
    INC,
    /// JuMP
    JMP,
    /// Jump to SubRoutine
    JSR,
    /// LoaD Acc
    LDA,
    /// LoaD X
    LDX,
    /// LoaD Y
    LDY,
    /// Logical Shift Right
    LSR,
    /// No OPeration
    NOP,
    /// bitwise OR with Acc
    ORA,

    //region Register instructions
    /// Transfer A to X
    TAX,
    /// Transfer X to A
    TXA,
    /// DEcrement X
    DEX,
    /// INcrement X
    INX,
    /// Transfer A to Y
    TAY,
    /// Transfer Y to A
    TYA,
    /// DEcrement Y
    DEY,
    /// INcrement Y
    INY,
    //endregion

    //region Rotation instructions
    // Rotation includes the Carry bit: rotating 0b1100_0000 left with C
    // clear yields 0b1000_0000, and C becomes set from the bit shifted out.
    /// ROtate Left
    ROL,
    /// ROtate Right
    ROR,
    //endregion

    //region Returns
    /// ReTurn from Interrupt
    RTI,
    /// ReTurn from Subroutine
    RTS,
    //endregion
    /// SuBtract with Carry*
    SBC,

    //region Store instructions
    /// STore Acc
    STA,
    /// STore X
    STX,
    /// STore Y
    STY,
    //endregion

    //region Stack instructions
    /// Transfer X to Stack
    TXS,
    /// Transfer Stack to X
    TSX,
    /// PusH Acc
    PHA,
    /// PuLl Acc
    PLA,
    /// PusH Processor status
    PHP,
    /// PuLl Processor status
    PLP,
    //endregion
}

impl Instruction {
    /// The three-letter mnemonic used in traces.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Instruction::ADC => "ADC",
            Instruction::AND => "AND",
            Instruction::ASL => "ASL",
            Instruction::BIT => "BIT",
            Instruction::BPL => "BPL",
            Instruction::BMI => "BMI",
            Instruction::BVC => "BVC",
            Instruction::BVS => "BVS",
            Instruction::BCC => "BCC",
            Instruction::BCS => "BCS",
            Instruction::BNE => "BNE",
            Instruction::BEQ => "BEQ",
            Instruction::BRK => "BRK",
            Instruction::CMP => "CMP",
            Instruction::CPX => "CPX",
            Instruction::CPY => "CPY",
            Instruction::DEC => "DEC",
            Instruction::EOR => "EOR",
            Instruction::CLC => "CLC",
            Instruction::SEC => "SEC",
            Instruction::CLI => "CLI",
            Instruction::SEI => "SEI",
            Instruction::CLV => "CLV",
            Instruction::CLD => "CLD",
            Instruction::SED => "SED",
            Instruction::INC => "INC",
            Instruction::JMP => "JMP",
            Instruction::JSR => "JSR",
            Instruction::LDA => "LDA",
            Instruction::LDX => "LDX",
            Instruction::LDY => "LDY",
            Instruction::LSR => "LSR",
            Instruction::NOP => "NOP",
            Instruction::ORA => "ORA",
            Instruction::TAX => "TAX",
            Instruction::TXA => "TXA",
            Instruction::DEX => "DEX",
            Instruction::INX => "INX",
            Instruction::TAY => "TAY",
            Instruction::TYA => "TYA",
            Instruction::DEY => "DEY",
            Instruction::INY => "INY",
            Instruction::ROL => "ROL",
            Instruction::ROR => "ROR",
            Instruction::RTI => "RTI",
            Instruction::RTS => "RTS",
            Instruction::SBC => "SBC",
            Instruction::STA => "STA",
            Instruction::STX => "STX",
            Instruction::STY => "STY",
            Instruction::TXS => "TXS",
            Instruction::TSX => "TSX",
            Instruction::PHA => "PHA",
            Instruction::PLA => "PLA",
            Instruction::PHP => "PHP",
            Instruction::PLP => "PLP",
        }
    }
}
