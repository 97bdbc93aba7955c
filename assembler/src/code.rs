//! Code generation module for Hack assembly language
//!
//! Translates assembly mnemonics to binary machine code using perfect hash functions (PHF).
//! PHF provides O(1) lookup with zero runtime overhead - the hash table is computed at compile time.
//!
//! # Performance
//! - All lookups use PHF maps: O(1) compile-time perfect hashing
//! - String formatting uses standard library (optimized by LLVM)
//! - Hot paths are inlined for better performance

use crate::error::AssemblerError;
use phf::phf_map;

/// Destination mnemonic to binary code mapping (3 bits)
///
/// Maps destination mnemonics to their 3-bit binary representation.
/// Empty string represents null destination.
static DEST_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "" => "000",
    "M" => "001",
    "D" => "010",
    "MD" => "011",
    "A" => "100",
    "AM" => "101",
    "AD" => "110",
    "AMD" => "111",
};

/// Computation mnemonic to binary code mapping (7 bits: 1 bit 'a' + 6 bits 'cccccc')
///
/// Includes both a=0 (A register) and a=1 (M register) variants directly —
/// every `M` mnemonic already carries its a-bit and 6-bit pattern, so no
/// separate `M`→`A` substitution step is needed at lookup time.
static COMP_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    // a=0 (A register operations)
    "0" => "0101010",
    "1" => "0111111",
    "-1" => "0111010",
    "D" => "0001100",
    "A" => "0110000",
    "!D" => "0001101",
    "!A" => "0110001",
    "-D" => "0001111",
    "-A" => "0110011",
    "D+1" => "0011111",
    "A+1" => "0110111",
    "D-1" => "0001110",
    "A-1" => "0110010",
    "D+A" => "0000010",
    "D-A" => "0010011",
    "A-D" => "0000111",
    "D&A" => "0000000",
    "D|A" => "0010101",

    // a=1 (M register operations)
    "M" => "1110000",
    "!M" => "1110001",
    "-M" => "1110011",
    "M+1" => "1110111",
    "M-1" => "1110010",
    "D+M" => "1000010",
    "D-M" => "1010011",
    "M-D" => "1000111",
    "D&M" => "1000000",
    "D|M" => "1010101",
};

/// Jump mnemonic to binary code mapping (3 bits)
///
/// Maps jump mnemonics to their 3-bit binary representation.
/// Empty string represents no jump.
static JUMP_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "" => "000",
    "JGT" => "001",
    "JEQ" => "010",
    "JGE" => "011",
    "JLT" => "100",
    "JNE" => "101",
    "JLE" => "110",
    "JMP" => "111",
};

/// Translates a destination mnemonic to its binary code.
///
/// # Errors
/// Returns `InvalidDest` if `mnemonic` isn't one of the 8 valid combinations.
#[inline]
pub fn dest(mnemonic: &str) -> Result<&'static str, AssemblerError> {
    DEST_MAP
        .get(mnemonic)
        .copied()
        .ok_or_else(|| AssemblerError::InvalidDest(mnemonic.to_string()))
}

/// Translates a computation mnemonic to its binary code.
///
/// # Errors
/// Returns `UnknownComp` if `mnemonic` isn't in the Hack comp table.
#[inline]
pub fn comp(mnemonic: &str) -> Result<&'static str, AssemblerError> {
    COMP_MAP
        .get(mnemonic)
        .copied()
        .ok_or_else(|| AssemblerError::UnknownComp(mnemonic.to_string()))
}

/// Translates a jump mnemonic to its binary code.
///
/// # Errors
/// Returns `InvalidJump` if `mnemonic` isn't one of the 8 valid combinations.
#[inline]
pub fn jump(mnemonic: &str) -> Result<&'static str, AssemblerError> {
    JUMP_MAP
        .get(mnemonic)
        .copied()
        .ok_or_else(|| AssemblerError::InvalidJump(mnemonic.to_string()))
}

/// Encodes a complete C-instruction
///
/// C-instruction format: 111accccccdddjjj (16 bits)
/// - 111: C-instruction prefix (3 bits)
/// - acccccc: computation (7 bits)
/// - ddd: destination (3 bits)
/// - jjj: jump (3 bits)
///
/// # Example
/// ```
/// use assembler::code::encode_c_instruction;
/// let instruction = encode_c_instruction("D", "D+1", "").unwrap();
/// assert_eq!(instruction, "1110011111010000");
/// ```
///
/// # Errors
/// Returns the first invalid field encountered (`dest`, then `comp`, then `jump`).
pub fn encode_c_instruction(
    dest_mnemonic: &str,
    comp_mnemonic: &str,
    jump_mnemonic: &str,
) -> Result<String, AssemblerError> {
    let d = dest(dest_mnemonic)?;
    let c = comp(comp_mnemonic)?;
    let j = jump(jump_mnemonic)?;
    Ok(format!("111{c}{d}{j}"))
}

/// Encodes an A-instruction
///
/// A-instruction format: 0vvvvvvvvvvvvvvv (16 bits)
/// - 0: A-instruction prefix (1 bit)
/// - vvvvvvvvvvvvvvv: 15-bit address/value
///
/// # Example
/// ```
/// use assembler::code::encode_a_instruction;
/// let instruction = encode_a_instruction(100);
/// assert_eq!(instruction, "0000000001100100");
/// ```
#[inline]
#[must_use]
pub fn encode_a_instruction(address: u16) -> String {
    format!("{address:016b}")
}

/// Validates mnemonics for all three parts of a C-instruction.
///
/// # Example
/// ```
/// use assembler::code::validate_mnemonics;
/// let (d, c, j) = validate_mnemonics("D", "D+1", "JMP");
/// assert!(d && c && j);
/// ```
#[inline]
#[must_use]
pub fn validate_mnemonics(
    dest_mnemonic: &str,
    comp_mnemonic: &str,
    jump_mnemonic: &str,
) -> (bool, bool, bool) {
    (
        DEST_MAP.contains_key(dest_mnemonic),
        COMP_MAP.contains_key(comp_mnemonic),
        JUMP_MAP.contains_key(jump_mnemonic),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dest_translations() {
        assert_eq!(dest("").unwrap(), "000");
        assert_eq!(dest("M").unwrap(), "001");
        assert_eq!(dest("D").unwrap(), "010");
        assert_eq!(dest("MD").unwrap(), "011");
        assert_eq!(dest("A").unwrap(), "100");
        assert_eq!(dest("AM").unwrap(), "101");
        assert_eq!(dest("AD").unwrap(), "110");
        assert_eq!(dest("AMD").unwrap(), "111");

        assert_eq!(
            dest("INVALID").unwrap_err(),
            AssemblerError::InvalidDest("INVALID".to_string())
        );
    }

    #[test]
    fn test_comp_translations() {
        // a=0 cases
        assert_eq!(comp("0").unwrap(), "0101010");
        assert_eq!(comp("1").unwrap(), "0111111");
        assert_eq!(comp("D").unwrap(), "0001100");
        assert_eq!(comp("A").unwrap(), "0110000");
        assert_eq!(comp("D+A").unwrap(), "0000010");
        assert_eq!(comp("D&A").unwrap(), "0000000");

        // a=1 cases
        assert_eq!(comp("M").unwrap(), "1110000");
        assert_eq!(comp("!M").unwrap(), "1110001");
        assert_eq!(comp("-M").unwrap(), "1110011");
        assert_eq!(comp("M+1").unwrap(), "1110111");
        assert_eq!(comp("M-1").unwrap(), "1110010");
        assert_eq!(comp("D+M").unwrap(), "1000010");
        assert_eq!(comp("D-M").unwrap(), "1010011");
        assert_eq!(comp("M-D").unwrap(), "1000111");
        assert_eq!(comp("D&M").unwrap(), "1000000");
        assert_eq!(comp("D|M").unwrap(), "1010101");

        assert_eq!(
            comp("INVALID").unwrap_err(),
            AssemblerError::UnknownComp("INVALID".to_string())
        );
    }

    #[test]
    fn test_jump_translations() {
        assert_eq!(jump("").unwrap(), "000");
        assert_eq!(jump("JGT").unwrap(), "001");
        assert_eq!(jump("JEQ").unwrap(), "010");
        assert_eq!(jump("JGE").unwrap(), "011");
        assert_eq!(jump("JLT").unwrap(), "100");
        assert_eq!(jump("JNE").unwrap(), "101");
        assert_eq!(jump("JLE").unwrap(), "110");
        assert_eq!(jump("JMP").unwrap(), "111");

        assert_eq!(
            jump("JAG").unwrap_err(),
            AssemblerError::InvalidJump("JAG".to_string())
        );
    }

    #[test]
    fn test_encode_c_instruction() {
        assert_eq!(
            encode_c_instruction("D", "D+1", "").unwrap(),
            "1110011111010000"
        );
        assert_eq!(
            encode_c_instruction("MD", "M-1", "JEQ").unwrap(),
            "1111110010011010"
        );
        assert_eq!(
            encode_c_instruction("", "0", "JMP").unwrap(),
            "1110101010000111"
        );
        assert_eq!(
            encode_c_instruction("M", "1", "").unwrap(),
            "1110111111001000"
        );
    }

    #[test]
    fn test_encode_c_instruction_invalid_dest() {
        let err = encode_c_instruction("C", "A+1", "").unwrap_err();
        assert_eq!(err, AssemblerError::InvalidDest("C".to_string()));
    }

    #[test]
    fn test_encode_c_instruction_invalid_jump() {
        let err = encode_c_instruction("D", "A+1", "JAG").unwrap_err();
        assert_eq!(err, AssemblerError::InvalidJump("JAG".to_string()));
    }

    #[test]
    fn test_encode_a_instruction() {
        assert_eq!(encode_a_instruction(0), "0000000000000000");
        assert_eq!(encode_a_instruction(100), "0000000001100100");
        assert_eq!(encode_a_instruction(16384), "0100000000000000");
        assert_eq!(encode_a_instruction(32767), "0111111111111111");
    }

    #[test]
    fn test_validate_mnemonics() {
        let (d, c, j) = validate_mnemonics("D", "D+1", "JMP");
        assert!(d && c && j);

        let (d, c, j) = validate_mnemonics("INVALID", "D+1", "JMP");
        assert!(!d && c && j);

        let (d, c, j) = validate_mnemonics("", "0", "");
        assert!(d && c && j);
    }

    #[test]
    fn test_all_dest_mnemonics() {
        let dest_mnemonics = ["", "M", "D", "MD", "A", "AM", "AD", "AMD"];
        for mnemonic in &dest_mnemonics {
            let result = dest(mnemonic).unwrap();
            assert_eq!(result.len(), 3);
            assert!(result.chars().all(|c| c == '0' || c == '1'));
        }
    }

    #[test]
    fn test_all_jump_mnemonics() {
        let jump_mnemonics = ["", "JGT", "JEQ", "JGE", "JLT", "JNE", "JLE", "JMP"];
        for mnemonic in &jump_mnemonics {
            let result = jump(mnemonic).unwrap();
            assert_eq!(result.len(), 3);
            assert!(result.chars().all(|c| c == '0' || c == '1'));
        }
    }
}
