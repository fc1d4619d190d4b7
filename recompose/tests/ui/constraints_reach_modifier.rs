use recompose::subject::*;

fn needs_scalar<T: Scalar>(t: T) -> T {
    t
}

fn main() {
    let composed = recompose::compose3(
        gigantic_generic_function::<i32, Labeled, B>,
        |(t, u, v), r| {
            let _: &i32 = &t;
            let _: &Labeled = &u;
            let _: &B = &v;
            let _: &Union3<i32, Labeled, B> = r.some_giant_return_type();

            let _: &str = u.value();
            let _: char = v.letter();

            needs_scalar(t)
        },
    );

    assert_eq!(composed(3, Labeled::new("x"), B), 3);
}
