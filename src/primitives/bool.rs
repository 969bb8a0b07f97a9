//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: `Then` when true, `Else` when false.
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;

    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
    type Not = Absent;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;

    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
    type Not = Present;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logic_tables() {
        assert!(<<Present as Bool>::And<Present> as Bool>::VALUE);
        assert!(!<<Present as Bool>::And<Absent> as Bool>::VALUE);
        assert!(<<Absent as Bool>::Or<Present> as Bool>::VALUE);
        assert!(!<<Absent as Bool>::Or<Absent> as Bool>::VALUE);
        assert!(<<Absent as Bool>::Not as Bool>::VALUE);
        assert!(!<<Present as Bool>::Not as Bool>::VALUE);
    }

    #[test]
    fn test_if_selects_branch() {
        let picked: <Present as Bool>::If<u8, &str> = 7u8;
        assert_eq!(picked, 7);
        let other: <Absent as Bool>::If<u8, &str> = "else";
        assert_eq!(other, "else");
    }
}
