use recompose::subject::*;

#[derive(Debug, PartialEq)]
struct Cleaner<T> {
    a_cleaner_return_type: T,
}

fn takes_signature<F>(f: F) -> F
where
    F: Fn(f64, Labeled, AnyLetter) -> Cleaner<f64>,
{
    f
}

fn main() {
    let composed = takes_signature(recompose::compose3(
        gigantic_generic_function,
        |(t, _u, _v), _r| Cleaner {
            a_cleaner_return_type: t,
        },
    ));

    assert_eq!(
        composed(0.5, Labeled::new("x"), AnyLetter::A),
        Cleaner {
            a_cleaner_return_type: 0.5
        }
    );
}
