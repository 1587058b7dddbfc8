use sinkline::combine::{combine2, combine3, combine4};
use sinkline::consumer::Consumer;

#[test]
fn combine2_matches_the_documented_interleaving() {
    let (in0, in1) = combine2(|a: i32, b: i32| (a + b).to_string());

    assert_eq!(in0.call((1,)), None);
    assert_eq!(in1.call((2,)), Some("3".to_string()));
    assert_eq!(in1.call((4,)), Some("5".to_string()));
    assert_eq!(in0.call((5,)), Some("9".to_string()));
}

#[test]
fn combine3_fires_only_once_every_slot_has_a_value() {
    let (in0, in1, in2) = combine3(|a: i32, b: i32, c: i32| a + b + c);

    assert_eq!(in0.call((1,)), None);
    assert_eq!(in1.call((2,)), None);
    assert_eq!(in2.call((3,)), Some(6));

    assert_eq!(in0.call((10,)), Some(15));
}

#[test]
fn combine4_keeps_the_latest_value_per_slot() {
    let (in0, in1, in2, in3) = combine4(|a: i32, b: i32, c: i32, d: i32| a + b + c + d);

    assert_eq!(in0.call((1,)), None);
    assert_eq!(in1.call((1,)), None);
    assert_eq!(in2.call((1,)), None);
    assert_eq!(in3.call((1,)), Some(4));

    assert_eq!(in0.call((10,)), Some(13));
}
