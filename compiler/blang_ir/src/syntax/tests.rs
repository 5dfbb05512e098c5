use super::*;
use pretty_assertions::assert_eq;
use rustc_hash::FxHashSet;

// === Codes ===

#[test]
fn codes_use_width_offsets() {
    assert_eq!(OneCharSyntaxToken::Plus.code(), 2000);
    assert_eq!(OneCharSyntaxToken::Minus.code(), 2001);
    assert_eq!(TwoCharSyntaxToken::Equality.code(), 3000);
    assert_eq!(TwoCharSyntaxToken::LogicalShiftRight.code(), 3007);
    assert_eq!(ThreeCharSyntaxToken::ShiftLeftAssign.code(), 4000);
}

#[test]
fn codes_never_collide_across_widths() {
    let mut seen = FxHashSet::default();
    let all = OneCharSyntaxToken::ALL
        .iter()
        .map(|&t| SyntaxToken::from(t))
        .chain(TwoCharSyntaxToken::ALL.iter().map(|&t| SyntaxToken::from(t)))
        .chain(ThreeCharSyntaxToken::ALL.iter().map(|&t| SyntaxToken::from(t)));
    for token in all {
        assert!(seen.insert(token.code()), "duplicate code for {token:?}");
    }
}

#[test]
fn from_code_round_trips() {
    for &t in OneCharSyntaxToken::ALL {
        assert_eq!(SyntaxToken::from_code(t.code()), Some(SyntaxToken::One(t)));
    }
    for &t in TwoCharSyntaxToken::ALL {
        assert_eq!(SyntaxToken::from_code(t.code()), Some(SyntaxToken::Two(t)));
    }
    for &t in ThreeCharSyntaxToken::ALL {
        assert_eq!(SyntaxToken::from_code(t.code()), Some(SyntaxToken::Three(t)));
    }
}

#[test]
fn from_code_rejects_gaps() {
    assert_eq!(SyntaxToken::from_code(0), None);
    assert_eq!(SyntaxToken::from_code(1999), None);
    assert_eq!(SyntaxToken::from_code(2999), None);
    assert_eq!(SyntaxToken::from_code(3999), None);
    assert_eq!(SyntaxToken::from_code(4999), None);
}

// === Table construction invariants ===

#[test]
fn one_char_spellings_are_unique() {
    let spellings: FxHashSet<char> = OneCharSyntaxToken::ALL.iter().map(|t| t.chars()).collect();
    assert_eq!(spellings.len(), OneCharSyntaxToken::ALL.len());
}

#[test]
fn two_char_spellings_are_unique() {
    let spellings: FxHashSet<[char; 2]> =
        TwoCharSyntaxToken::ALL.iter().map(|t| t.chars()).collect();
    assert_eq!(spellings.len(), TwoCharSyntaxToken::ALL.len());
}

#[test]
fn three_char_spellings_are_unique() {
    let spellings: FxHashSet<(TwoCharSyntaxToken, char)> =
        ThreeCharSyntaxToken::ALL.iter().map(|t| t.chars()).collect();
    assert_eq!(spellings.len(), ThreeCharSyntaxToken::ALL.len());
}

#[test]
fn no_operator_starts_a_line_comment() {
    for &t in TwoCharSyntaxToken::ALL {
        assert_ne!(t.chars(), ['/', '/']);
    }
}

#[test]
fn operators_contain_no_whitespace() {
    for &t in OneCharSyntaxToken::ALL {
        assert!(!t.chars().is_whitespace());
    }
    for &t in TwoCharSyntaxToken::ALL {
        assert!(t.chars().iter().all(|c| !c.is_whitespace()));
    }
    for &t in ThreeCharSyntaxToken::ALL {
        assert!(!t.char3().is_whitespace());
    }
}

// === Lookup ===

#[test]
fn lookup_finds_every_variant() {
    for &t in OneCharSyntaxToken::ALL {
        assert_eq!(OneCharSyntaxToken::lookup(t.chars()), Some(t));
    }
    for &t in TwoCharSyntaxToken::ALL {
        assert_eq!(TwoCharSyntaxToken::lookup(t.char1(), t.char2()), Some(t));
    }
    for &t in ThreeCharSyntaxToken::ALL {
        assert_eq!(ThreeCharSyntaxToken::lookup(t.prefix(), t.char3()), Some(t));
    }
}

#[test]
fn lookup_misses() {
    assert_eq!(OneCharSyntaxToken::lookup('a'), None);
    assert_eq!(OneCharSyntaxToken::lookup('"'), None);
    assert_eq!(TwoCharSyntaxToken::lookup('/', '/'), None);
    assert_eq!(TwoCharSyntaxToken::lookup('=', '>'), None);
    assert_eq!(
        ThreeCharSyntaxToken::lookup(TwoCharSyntaxToken::Equality, '='),
        None
    );
}

#[test]
fn three_char_derives_prefix_characters() {
    let t = ThreeCharSyntaxToken::ShiftRightAssign;
    assert_eq!(t.prefix(), TwoCharSyntaxToken::LogicalShiftRight);
    assert_eq!([t.char1(), t.char2(), t.char3()], ['>', '>', '=']);
}

// === Display ===

#[test]
fn display_spells_operator() {
    assert_eq!(SyntaxToken::from(OneCharSyntaxToken::Semicolon).to_string(), ";");
    assert_eq!(SyntaxToken::from(TwoCharSyntaxToken::Arrow).to_string(), "->");
    assert_eq!(
        SyntaxToken::from(ThreeCharSyntaxToken::PowerAssign).to_string(),
        "**="
    );
}

#[test]
fn width_matches_spelling() {
    for &t in TwoCharSyntaxToken::ALL {
        let token = SyntaxToken::from(t);
        assert_eq!(token.to_string().chars().count(), token.width());
    }
    for &t in ThreeCharSyntaxToken::ALL {
        let token = SyntaxToken::from(t);
        assert_eq!(token.to_string().chars().count(), token.width());
    }
}
