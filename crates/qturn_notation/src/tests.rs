use pretty_assertions::assert_eq;
use proptest::prelude::*;
use qturn_core::Face;

use crate::*;

#[test]
fn test_face_turns() {
    assert_eq!(parse_move("R"), Ok(Move::face_turn(Face::R)));
    assert_eq!(
        parse_move("U'"),
        Ok(Move {
            prefix: LayerPrefix::Outer,
            face: Face::U,
            turn: Turn::Counter,
        })
    );
    assert_eq!(
        parse_move("B2"),
        Ok(Move {
            prefix: LayerPrefix::Outer,
            face: Face::B,
            turn: Turn::Double,
        })
    );
}

#[test]
fn test_layer_prefixes() {
    assert_eq!(
        parse_move("CR"),
        Ok(Move {
            prefix: LayerPrefix::Cube,
            face: Face::R,
            turn: Turn::Clockwise,
        })
    );
    assert_eq!(
        parse_move("TR'"),
        Ok(Move {
            prefix: LayerPrefix::Tier(None),
            face: Face::R,
            turn: Turn::Counter,
        })
    );
    assert_eq!(
        parse_move("T3R"),
        Ok(Move {
            prefix: LayerPrefix::Tier(Some(3)),
            face: Face::R,
            turn: Turn::Clockwise,
        })
    );
    assert_eq!(
        parse_move("NL"),
        Ok(Move {
            prefix: LayerPrefix::Numbered(None),
            face: Face::L,
            turn: Turn::Clockwise,
        })
    );
    assert_eq!(
        parse_move("N3R2"),
        Ok(Move {
            prefix: LayerPrefix::Numbered(Some(LayerSpec::Single(3))),
            face: Face::R,
            turn: Turn::Double,
        })
    );
    assert_eq!(
        parse_move("N2-4L'"),
        Ok(Move {
            prefix: LayerPrefix::Numbered(Some(LayerSpec::Range(2, 4))),
            face: Face::L,
            turn: Turn::Counter,
        })
    );
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse_move(""), Err(ParseMoveError::MissingFace));
    assert_eq!(parse_move("C"), Err(ParseMoveError::MissingFace));
    assert_eq!(parse_move("Q"), Err(ParseMoveError::BadFace('Q')));
    assert_eq!(parse_move("r"), Err(ParseMoveError::BadFace('r')));
    assert_eq!(parse_move("RU"), Err(ParseMoveError::UnexpectedChar('U')));
    assert_eq!(parse_move("R'2"), Err(ParseMoveError::UnexpectedChar('2')));
    assert_eq!(parse_move("R22"), Err(ParseMoveError::UnexpectedChar('2')));
    assert_eq!(parse_move("N-3R"), Err(ParseMoveError::MalformedRange));
    assert_eq!(parse_move("N2-R"), Err(ParseMoveError::MalformedRange));
    assert_eq!(parse_move("N99999R"), Err(ParseMoveError::BadLayerNumber));
}

#[test]
fn test_layer_resolution() {
    let resolve = |token: &str| parse_move(token).unwrap().layer_list(5).to_vec();

    assert_eq!(resolve("R"), vec![1]);
    assert_eq!(resolve("CR"), vec![1, 2, 3, 4, 5]);
    assert_eq!(resolve("TR"), vec![1, 2]);
    assert_eq!(resolve("T4R"), vec![1, 2, 3, 4]);
    assert_eq!(resolve("T1R"), vec![1]);
    assert_eq!(resolve("NR"), vec![2]);
    assert_eq!(resolve("N4R"), vec![4]);
    assert_eq!(resolve("N2-4R"), vec![2, 3, 4]);
    // An inverted range selects nothing, like any out-of-range layer.
    assert_eq!(resolve("N4-2R"), vec![]);
}

#[test]
fn test_multipliers() {
    assert_eq!(Turn::Clockwise.multiplier(), -1.0);
    assert_eq!(Turn::Counter.multiplier(), 1.0);
    assert_eq!(Turn::Double.multiplier(), 2.0);
}

#[test]
fn test_3x3_dialect() {
    let dialect = Dialect::Size3;

    assert_eq!(dialect.translate("R'").unwrap(), "R'");
    assert_eq!(dialect.translate("r'").unwrap(), "TR'");
    assert_eq!(dialect.translate("M").unwrap(), "NL");
    assert_eq!(dialect.translate("E2").unwrap(), "ND2");
    assert_eq!(dialect.translate("S").unwrap(), "NF");
    assert_eq!(dialect.translate("X").unwrap(), "CR");
    assert_eq!(dialect.translate("Y'").unwrap(), "CU'");
    assert_eq!(dialect.translate("Z2").unwrap(), "CF2");

    assert_eq!(
        dialect.parse("Q"),
        Err(NotationError::UnsupportedMove("Q".to_string()))
    );
    // The slice aliases are uppercase only.
    assert!(dialect.parse("x").is_err());
}

#[test]
fn test_small_dialects() {
    assert_eq!(Dialect::Size2.translate("R2").unwrap(), "R2");
    assert_eq!(Dialect::Size2.translate("X").unwrap(), "CR");
    assert!(Dialect::Size2.parse("M").is_err());
    assert!(Dialect::Size2.parse("r").is_err());

    assert_eq!(Dialect::Size1.translate("Y'").unwrap(), "CU'");
    assert!(Dialect::Size1.parse("R").is_err());
}

#[test]
fn test_big_dialect() {
    let dialect = Dialect::Big;

    assert_eq!(dialect.translate("X").unwrap(), "CR");
    // Canonical tokens pass through for the parser to handle.
    assert_eq!(
        dialect.parse("N2-3R"),
        Ok(Move {
            prefix: LayerPrefix::Numbered(Some(LayerSpec::Range(2, 3))),
            face: Face::R,
            turn: Turn::Clockwise,
        })
    );
    assert_eq!(
        dialect.parse("q"),
        Err(NotationError::Parse(ParseMoveError::BadFace('q')))
    );
}

#[test]
fn test_dialect_for_size() {
    use qturn_core::CubeSize;

    assert_eq!(Dialect::for_size(CubeSize::cubic(1)), Dialect::Size1);
    assert_eq!(Dialect::for_size(CubeSize::cubic(2)), Dialect::Size2);
    assert_eq!(Dialect::for_size(CubeSize::cubic(3)), Dialect::Size3);
    assert_eq!(Dialect::for_size(CubeSize::cubic(5)), Dialect::Big);
    assert_eq!(Dialect::for_size(CubeSize::new(3, 3, 2)), Dialect::Big);
}

#[test]
fn test_display() {
    let mv = Move {
        prefix: LayerPrefix::Tier(Some(3)),
        face: Face::R,
        turn: Turn::Double,
    };
    assert_eq!(mv.to_string(), "T3R2");
    assert_eq!(Move::face_turn(Face::U).to_string(), "U");
}

fn move_strategy() -> impl Strategy<Value = Move> {
    use Face::*;

    let face = prop_oneof![Just(R), Just(L), Just(U), Just(D), Just(F), Just(B)];
    let turn = prop_oneof![
        Just(Turn::Clockwise),
        Just(Turn::Counter),
        Just(Turn::Double),
    ];
    let prefix = prop_oneof![
        Just(LayerPrefix::Outer),
        Just(LayerPrefix::Cube),
        prop::option::of(0u16..100).prop_map(LayerPrefix::Tier),
        prop::option::of(prop_oneof![
            (0u16..100).prop_map(LayerSpec::Single),
            (0u16..100, 0u16..100).prop_map(|(a, b)| LayerSpec::Range(a, b)),
        ])
        .prop_map(LayerPrefix::Numbered),
    ];
    (prefix, face, turn).prop_map(|(prefix, face, turn)| Move { prefix, face, turn })
}

proptest! {
    #[test]
    fn proptest_move_roundtrip(mv in move_strategy()) {
        prop_assert_eq!(parse_move(&mv.to_string()), Ok(mv));
    }
}
