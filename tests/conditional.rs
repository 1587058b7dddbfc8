use sinkline::conditional::{sinkline_if, sinkline_if_some};
use sinkline::consumer::Consumer;
use sinkline::sinkline;

#[test]
fn disabled_sinkline_never_runs_the_wrapped_sink() {
    let pipeline = sinkline!(sinkline_if(false, |x: i32| x * 2));
    assert_eq!(pipeline.call((21,)), None);
}

#[test]
fn enabled_sinkline_runs_and_wraps_the_result() {
    let pipeline = sinkline!(sinkline_if(true, |x: i32| x * 2));
    assert_eq!(pipeline.call((21,)), Some(42));
}

#[test]
fn sinkline_if_composes_at_the_end_of_a_longer_chain() {
    use sinkline::operators::map;

    let pipeline = sinkline!(map(|x: i32| x + 1), sinkline_if(true, |x: i32| x.to_string()));
    assert_eq!(pipeline.call((41,)), Some("42".to_string()));
}

#[test]
fn null_sink_variant_returns_empty() {
    let pipeline = sinkline!(sinkline_if_some::<fn(i32) -> i32>(None));
    assert_eq!(pipeline.call((21,)), None);
}

#[test]
fn present_sink_variant_runs_and_wraps_the_result() {
    let pipeline = sinkline!(sinkline_if_some(Some(|x: i32| x * 2)));
    assert_eq!(pipeline.call((21,)), Some(42));
}
