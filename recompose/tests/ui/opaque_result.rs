use recompose::modifier::keep_result;
use recompose::subject::*;

fn assert_giant<R: GiantReturn<u8, Labeled, C>>(r: R) -> Union3<u8, Labeled, C> {
    r.into_some_giant_return_type()
}

fn main() {
    let same = recompose::compose3(gigantic_generic_function, keep_result);

    assert_eq!(
        assert_giant(same(1u8, Labeled::new("x"), C)),
        Union3::First(1)
    );
}
