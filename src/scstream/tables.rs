//! Compiled LALR(1) tables for the catalog grammar.
//!
//! Generated from the grammar in the module documentation of
//! [`super::parser`]; shift/reduce conflicts resolve in favour of shifting
//! (so value lists keep extending and the braced directive form wins inside
//! a sub-table). A reduce entry keyed `0` is the state's default reduction.

/// One parser state: shift, reduce and goto maps plus the accept flag and the
/// human-readable expectation used in diagnostics.
pub(crate) struct LrState {
    pub accept: bool,
    pub shifts: &'static [(u8, u8)],
    pub reduces: &'static [(u8, u8)],
    pub gotos: &'static [(u8, u8)],
    pub message: &'static str,
}

/// `(left-hand side, right-hand length)` of every production, indexed by the
/// reduce entries above.
pub(crate) const PRODUCTIONS: [(u8, u8); 25] = [
    (b'Z', 1),
    (b'S', 3),
    (b'S', 5),
    (b'S', 2),
    (b'S', 0),
    (b'T', 2),
    (b'T', 1),
    (b'T', 1),
    (b'B', 3),
    (b'V', 1),
    (b'V', 3),
    (b'V', 3),
    (b'N', 3),
    (b'E', 1),
    (b'E', 1),
    (b'E', 1),
    (b'E', 1),
    (b'A', 1),
    (b'A', 3),
    (b'A', 2),
    (b'M', 3),
    (b'M', 2),
    (b'M', 2),
    (b'M', 1),
    (b'S', 2),
];

pub(crate) const STATES: [LrState; 41] = [
    LrState { accept: false, shifts: &[(b'i', 6), (b'v', 8), (b'n', 3), (b's', 2), (b'b', 5)], reduces: &[(0x03, 4)], gotos: &[(b'S', 1), (b'B', 7), (b'E', 4)], message: "expecting a value, an identifier or end of input" },
    LrState { accept: true, shifts: &[], reduces: &[], gotos: &[], message: "already accepted" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 14)], gotos: &[], message: "expecting a value, an identifier, an operator, ',', '(', ')', '{', '}' or end of input" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 13)], gotos: &[], message: "expecting a value, an identifier, an operator, ',', '(', ')', '{', '}' or end of input" },
    LrState { accept: false, shifts: &[(b'o', 33)], reduces: &[], gotos: &[], message: "expecting an operator" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 16)], gotos: &[], message: "expecting a value, an identifier, an operator, ',', '(', ')', '{', '}' or end of input" },
    LrState { accept: false, shifts: &[(b'i', 6), (b'v', 8), (b'n', 3), (b's', 2), (b'b', 5), (b'(', 16), (b'{', 12)], reduces: &[(b'}', 4), (0x03, 4)], gotos: &[(b'S', 11), (b'T', 10), (b'B', 7), (b'V', 15), (b'N', 14), (b'E', 13)], message: "expecting a value, an identifier, '(', '{', '}' or end of input" },
    LrState { accept: false, shifts: &[(b'i', 6), (b'v', 8), (b'n', 3), (b's', 2), (b'b', 5)], reduces: &[(b'}', 4), (0x03, 4)], gotos: &[(b'S', 9), (b'B', 7), (b'E', 4)], message: "expecting a value, an identifier, '}' or end of input" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 15)], gotos: &[], message: "expecting a value, an identifier, an operator, ',', '(', ')', '{', '}' or end of input" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 24)], gotos: &[], message: "expecting '}' or end of input" },
    LrState { accept: false, shifts: &[(b'i', 6), (b'v', 8), (b'n', 3), (b's', 2), (b'b', 5)], reduces: &[(b'}', 4), (0x03, 4)], gotos: &[(b'S', 40), (b'B', 7), (b'E', 4)], message: "expecting a value, an identifier, '}' or end of input" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 3)], gotos: &[], message: "expecting '}' or end of input" },
    LrState { accept: false, shifts: &[(b'i', 6), (b'v', 8), (b'n', 3), (b's', 2), (b'b', 5), (b'(', 16), (b'{', 27)], reduces: &[(b'}', 4)], gotos: &[(b'S', 26), (b'B', 37), (b'V', 29), (b'E', 13), (b'M', 28)], message: "expecting a value, an identifier, '(', '{' or '}'" },
    LrState { accept: false, shifts: &[(b'o', 33)], reduces: &[(b'i', 9), (b'v', 9), (b'n', 9), (b's', 9), (b'b', 9), (b',', 9), (b'(', 9), (b'{', 9), (b'}', 9), (0x03, 9)], gotos: &[], message: "expecting a value, an identifier, an operator, ',', '(', '{', '}' or end of input" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 7)], gotos: &[], message: "expecting a value, an identifier, '}' or end of input" },
    LrState { accept: false, shifts: &[(b'v', 8), (b'n', 3), (b's', 2), (b'b', 5), (b'(', 16), (b'{', 24)], reduces: &[(b'i', 6), (b'}', 6), (0x03, 6)], gotos: &[(b'T', 23), (b'V', 15), (b'N', 14), (b'E', 25)], message: "expecting a value, an identifier, '(', '{', '}' or end of input" },
    LrState { accept: false, shifts: &[(b'v', 8), (b'n', 3), (b's', 2), (b'b', 5)], reduces: &[], gotos: &[(b'E', 18), (b'A', 17)], message: "expecting a value" },
    LrState { accept: false, shifts: &[(b'v', 8), (b'n', 3), (b's', 2), (b'b', 5), (b',', 20), (b')', 21)], reduces: &[], gotos: &[(b'E', 19)], message: "expecting a value, ',' or ')'" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 17)], gotos: &[], message: "expecting a value, ',' or ')'" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 19)], gotos: &[], message: "expecting a value, ',' or ')'" },
    LrState { accept: false, shifts: &[(b'v', 8), (b'n', 3), (b's', 2), (b'b', 5)], reduces: &[], gotos: &[(b'E', 22)], message: "expecting a value" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 10)], gotos: &[], message: "expecting a value, an identifier, ',', '(', '{', '}' or end of input" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 18)], gotos: &[], message: "expecting a value, ',' or ')'" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 5)], gotos: &[], message: "expecting a value, an identifier, '}' or end of input" },
    LrState { accept: false, shifts: &[(b'i', 6), (b'v', 8), (b'n', 3), (b's', 2), (b'b', 5), (b'(', 16), (b'{', 27)], reduces: &[(b'}', 4)], gotos: &[(b'S', 26), (b'B', 7), (b'V', 29), (b'E', 13), (b'M', 28)], message: "expecting a value, an identifier, '(', '{' or '}'" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 9)], gotos: &[], message: "expecting a value, an identifier, ',', '(', '{', '}' or end of input" },
    LrState { accept: false, shifts: &[(b'}', 36)], reduces: &[], gotos: &[], message: "expecting '}'" },
    LrState { accept: false, shifts: &[(b'v', 8), (b'n', 3), (b's', 2), (b'b', 5), (b'(', 16), (b'{', 27)], reduces: &[], gotos: &[(b'V', 29), (b'E', 25), (b'M', 28)], message: "expecting a value, '(' or '{'" },
    LrState { accept: false, shifts: &[(b'}', 35)], reduces: &[], gotos: &[], message: "expecting '}'" },
    LrState { accept: false, shifts: &[(b'v', 8), (b'n', 3), (b's', 2), (b'b', 5), (b',', 30), (b'(', 16), (b'{', 27)], reduces: &[(b'}', 23)], gotos: &[(b'V', 29), (b'E', 25), (b'M', 31)], message: "expecting a value, ',', '(', '{' or '}'" },
    LrState { accept: false, shifts: &[(b'v', 8), (b'n', 3), (b's', 2), (b'b', 5), (b'(', 16), (b'{', 27)], reduces: &[(b'}', 22)], gotos: &[(b'V', 29), (b'E', 25), (b'M', 32)], message: "expecting a value, '(', '{' or '}'" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 21)], gotos: &[], message: "expecting '}'" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 20)], gotos: &[], message: "expecting '}'" },
    LrState { accept: false, shifts: &[(b'v', 8), (b'n', 3), (b's', 2), (b'b', 5)], reduces: &[], gotos: &[(b'E', 34)], message: "expecting a value" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 8)], gotos: &[], message: "expecting a value, an identifier, '}' or end of input" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 11)], gotos: &[], message: "expecting a value, an identifier, ',', '(', '{', '}' or end of input" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 12)], gotos: &[], message: "expecting a value, an identifier, '}' or end of input" },
    LrState { accept: false, shifts: &[(b'i', 6), (b'v', 8), (b'n', 3), (b's', 2), (b'b', 5), (b'}', 38)], reduces: &[], gotos: &[(b'S', 9), (b'B', 7), (b'E', 4)], message: "expecting a value, an identifier or '}'" },
    LrState { accept: false, shifts: &[(b'i', 6), (b'v', 8), (b'n', 3), (b's', 2), (b'b', 5)], reduces: &[(b'}', 4), (0x03, 4)], gotos: &[(b'S', 39), (b'B', 7), (b'E', 4)], message: "expecting a value, an identifier, '}' or end of input" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 2)], gotos: &[], message: "expecting '}' or end of input" },
    LrState { accept: false, shifts: &[], reduces: &[(0, 1)], gotos: &[], message: "expecting '}' or end of input" },
];
