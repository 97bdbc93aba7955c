//! Symbol table module for Hack assembler
//!
//! Uses a hybrid approach for optimal performance:
//! - PHF (Perfect Hash Function) for predefined symbols - O(1) compile-time lookup
//! - Standard `HashMap` for user-defined symbols - dynamic insertion
//!
//! Labels and variables share the same user-symbol store: labels are installed
//! during preprocessing, before any variable gets a chance to allocate, so a
//! plain lookup already gives labels precedence over allocation.

use crate::error::AssemblerError;
use phf::phf_map;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Predefined symbols with compile-time perfect hash
///
/// These symbols are built into the Hack platform and never change.
/// Using PHF gives us zero-cost lookups at runtime.
static PREDEFINED_SYMBOLS: phf::Map<&'static str, u16> = phf_map! {
    // Virtual registers
    "R0" => 0,
    "R1" => 1,
    "R2" => 2,
    "R3" => 3,
    "R4" => 4,
    "R5" => 5,
    "R6" => 6,
    "R7" => 7,
    "R8" => 8,
    "R9" => 9,
    "R10" => 10,
    "R11" => 11,
    "R12" => 12,
    "R13" => 13,
    "R14" => 14,
    "R15" => 15,

    // Special pointers
    "SP" => 0,
    "LCL" => 1,
    "ARG" => 2,
    "THIS" => 3,
    "THAT" => 4,

    // I/O pointers
    "SCREEN" => 16384,
    "KBD" => 24576,
};

/// Highest RAM address the variable allocator may hand out.
pub const MAX_SYMBOL_ADDRESS: u16 = 0x3FFF;

/// Symbol table for the Hack assembler
///
/// Maintains mappings between symbolic labels and numeric addresses.
/// Handles both predefined symbols (via PHF) and user-defined symbols
/// (labels and variables, via `HashMap`).
#[derive(Debug)]
pub struct SymbolTable {
    /// User-defined symbols: labels (ROM addresses) and variables (RAM addresses).
    user_symbols: HashMap<String, u16>,
    /// Every address value currently bound to some name, predefined or not.
    /// Lets the variable allocator skip an address already claimed by a
    /// predefined symbol or another label/variable.
    bound_addresses: HashSet<u16>,
}

impl Default for SymbolTable {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolTable")
    }
}

impl SymbolTable {
    /// Creates a new symbol table. Predefined symbols are available via PHF,
    /// so no explicit initialization is needed for them.
    #[must_use]
    pub fn new() -> Self {
        Self {
            user_symbols: HashMap::with_capacity(32),
            bound_addresses: HashSet::with_capacity(32),
        }
    }

    /// Declares a label, binding it to a ROM address.
    ///
    /// # Errors
    /// Returns `DuplicateLabel` if `symbol` is already declared (as a label,
    /// or — in principle — a predefined/variable name).
    pub fn declare_label(&mut self, symbol: &str, address: u16) -> Result<(), AssemblerError> {
        if PREDEFINED_SYMBOLS.contains_key(symbol) || self.user_symbols.contains_key(symbol) {
            return Err(AssemblerError::DuplicateLabel(symbol.to_string()));
        }
        self.user_symbols.insert(symbol.to_string(), address);
        self.bound_addresses.insert(address);
        Ok(())
    }

    /// Looks up a symbol without allocating: predefined symbols first, then
    /// user-defined labels/variables.
    #[inline]
    #[must_use]
    pub fn lookup(&self, symbol: &str) -> Option<u16> {
        PREDEFINED_SYMBOLS
            .get(symbol)
            .copied()
            .or_else(|| self.user_symbols.get(symbol).copied())
    }

    /// Allocates a fresh RAM address for an undeclared variable.
    ///
    /// Draws from `*next_ram..=MAX_SYMBOL_ADDRESS`, skipping any address
    /// already bound to another symbol, so a variable can never alias a
    /// predeclared register or another variable/label.
    ///
    /// # Errors
    /// Returns `SymbolSpaceExhausted` if no free address remains below
    /// `MAX_SYMBOL_ADDRESS`.
    pub fn allocate(&mut self, symbol: &str, next_ram: &mut u16) -> Result<u16, AssemblerError> {
        loop {
            if *next_ram > MAX_SYMBOL_ADDRESS {
                return Err(AssemblerError::SymbolSpaceExhausted);
            }
            let candidate = *next_ram;
            *next_ram += 1;
            if !self.bound_addresses.contains(&candidate) {
                self.user_symbols.insert(symbol.to_string(), candidate);
                self.bound_addresses.insert(candidate);
                return Ok(candidate);
            }
        }
    }

    /// Gets or inserts a symbol, returning its address.
    ///
    /// This is the HOT PATH for variable resolution in pass 2: checks
    /// predefined symbols, then user symbols, and only allocates as a last
    /// resort.
    pub fn get_or_insert(
        &mut self,
        symbol: &str,
        next_ram: &mut u16,
    ) -> Result<u16, AssemblerError> {
        if let Some(addr) = self.lookup(symbol) {
            return Ok(addr);
        }
        match self.user_symbols.entry(symbol.to_string()) {
            Entry::Occupied(e) => Ok(*e.get()),
            Entry::Vacant(_) => self.allocate(symbol, next_ram),
        }
    }

    /// Checks if a symbol exists (either predefined or user-defined).
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        PREDEFINED_SYMBOLS.contains_key(symbol) || self.user_symbols.contains_key(symbol)
    }

    /// Returns the number of user-defined symbols (labels + variables).
    #[inline]
    #[must_use]
    pub fn user_symbol_count(&self) -> usize {
        self.user_symbols.len()
    }

    /// Returns the total number of predefined symbols (23).
    #[inline]
    #[must_use]
    pub const fn predefined_symbol_count() -> usize {
        PREDEFINED_SYMBOLS.len()
    }

    /// Returns the user-defined symbols sorted by address, for the
    /// diagnostic dump printed to stderr.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&str, u16)> {
        let mut entries: Vec<(&str, u16)> = self
            .user_symbols
            .iter()
            .map(|(k, &v)| (k.as_str(), v))
            .collect();
        entries.sort_by_key(|&(_, addr)| addr);
        entries
    }
}
