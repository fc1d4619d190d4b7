//!
//! Example subject functions.
//!
//! These stand in for functions from some library whose signatures are too
//! large, or too opaque, to restate: several constrained type parameters,
//! and a return type that exists only inline as an `impl Trait`.
//!

use std::fmt::Debug;

/// Numeric coercion of a string, with the rules of ECMAScript's `Number(s)`.
///
/// Surrounding whitespace (including U+FEFF) is ignored and the empty string
/// is zero. Accepted are decimal literals with an optional sign, fraction and
/// exponent, `Infinity` with an optional sign, and unsigned `0x`/`0b`/`0o`
/// integers. Anything else is `NaN`.
pub fn very_simple_generic<S>(s: S) -> f64
where
    S: AsRef<str>,
{
    let trimmed = s.as_ref().trim_matches(is_js_whitespace);

    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => parse_radix_literal(trimmed)
            .or_else(|| parse_decimal_literal(trimmed))
            .unwrap_or(f64::NAN),
    }
}

/// `WhiteSpace` and `LineTerminator` of ECMAScript: Unicode white space
/// except NEL, plus the byte order mark.
fn is_js_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0b" | "0B" => 2,
        "0o" | "0O" => 8,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    // Folded as f64 so literals wider than 64 bits round instead of failing.
    let value = digits.chars().try_fold(0.0, |acc: f64, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    });

    Some(value.unwrap_or(f64::NAN))
}

/// Only the characters of a decimal literal reach `f64::from_str`, which
/// keeps out its `inf`/`infinity`/`nan` spellings.
fn parse_decimal_literal(s: &str) -> Option<f64> {
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }

    s.parse().ok()
}

/// A function with three constrained type parameters, whose result type
/// can only be referred to as `impl GiantReturn<T, U, V>`.
pub fn gigantic_generic_function<T, U, V>(t: T, u: U, v: V) -> impl GiantReturn<T, U, V>
where
    T: Scalar,
    U: HasValue,
    V: Letter,
{
    log::trace!(
        "gigantic_generic_function({:?}, {:?}, {})",
        t,
        u.value(),
        v.letter()
    );

    Giant {
        some_giant_return_type: Union3::First(t),
    }
}

/// One of three types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Union3<T, U, V> {
    First(T),
    Second(U),
    Third(V),
}

/// What can be done with the result of [gigantic_generic_function].
pub trait GiantReturn<T, U, V>: Debug + PartialEq {
    fn some_giant_return_type(&self) -> &Union3<T, U, V>;

    fn into_some_giant_return_type(self) -> Union3<T, U, V>;
}

#[derive(Debug, PartialEq)]
struct Giant<T, U, V> {
    some_giant_return_type: Union3<T, U, V>,
}

impl<T, U, V> GiantReturn<T, U, V> for Giant<T, U, V>
where
    T: Scalar,
    U: HasValue,
    V: Letter,
{
    fn some_giant_return_type(&self) -> &Union3<T, U, V> {
        &self.some_giant_return_type
    }

    fn into_some_giant_return_type(self) -> Union3<T, U, V> {
        self.some_giant_return_type
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A boolean or a number.
pub trait Scalar: sealed::Sealed + Copy + Debug + PartialEq {}

macro_rules! scalars {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Scalar for $ty {}
        )*
    };
}

scalars!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Anything with a string `value`.
pub trait HasValue: Debug + PartialEq {
    fn value(&self) -> &str;
}

/// The plainest [HasValue].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Labeled {
    pub value: String,
}

impl Labeled {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl HasValue for Labeled {
    fn value(&self) -> &str {
        &self.value
    }
}

impl<T: HasValue> HasValue for &T {
    fn value(&self) -> &str {
        (*self).value()
    }
}

/// One of the letters `a` to `e`.
pub trait Letter: Copy + Debug + PartialEq {
    fn letter(&self) -> char;
}

macro_rules! letters {
    ($($ident:ident => $char:literal),*) => {
        $(
            #[doc = concat!("The letter `", $char, "`.")]
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
            pub struct $ident;

            impl Letter for $ident {
                fn letter(&self) -> char {
                    $char
                }
            }
        )*

        /// A letter picked at runtime.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum AnyLetter {
            $($ident),*
        }

        impl Letter for AnyLetter {
            fn letter(&self) -> char {
                match self {
                    $(Self::$ident => $char),*
                }
            }
        }

        impl TryFrom<char> for AnyLetter {
            type Error = ParseLetterError;

            fn try_from(c: char) -> Result<Self, Self::Error> {
                match c {
                    $($char => Ok(Self::$ident),)*
                    other => Err(ParseLetterError(other)),
                }
            }
        }
    };
}

letters!(A => 'a', B => 'b', C => 'c', D => 'd', E => 'e');

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Not one of the letters a to e: {0:?}")]
pub struct ParseLetterError(pub char);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_coercion() {
        assert_eq!(very_simple_generic("1"), 1.0);
        assert_eq!(very_simple_generic(" 2.5\n"), 2.5);
        assert_eq!(very_simple_generic(String::from("-3")), -3.0);
        assert_eq!(very_simple_generic(".5"), 0.5);
        assert_eq!(very_simple_generic("5."), 5.0);
        assert_eq!(very_simple_generic("+1e3"), 1000.0);
        assert_eq!(very_simple_generic(""), 0.0);
        assert_eq!(very_simple_generic("   "), 0.0);
        assert!(very_simple_generic("one").is_nan());
        assert!(very_simple_generic(".").is_nan());
        assert!(very_simple_generic("1_000").is_nan());
    }

    #[test]
    fn numeric_coercion_whitespace() {
        assert_eq!(very_simple_generic("\u{feff}1"), 1.0);
        assert_eq!(very_simple_generic("\u{a0}\t2\u{2028}"), 2.0);
        assert!(very_simple_generic("\u{85}1").is_nan());
    }

    #[test]
    fn numeric_coercion_radix_literals() {
        assert_eq!(very_simple_generic("0x10"), 16.0);
        assert_eq!(very_simple_generic("0XfF"), 255.0);
        assert_eq!(very_simple_generic("0b11"), 3.0);
        assert_eq!(very_simple_generic("0o7"), 7.0);
        assert_eq!(
            very_simple_generic("0x1ffffffffffffffff"),
            36893488147419103232.0
        );
        assert!(very_simple_generic("0x").is_nan());
        assert!(very_simple_generic("0b2").is_nan());
        assert!(very_simple_generic("-0x10").is_nan());
        assert!(very_simple_generic("0x+10").is_nan());
    }

    #[test]
    fn numeric_coercion_infinity() {
        assert_eq!(very_simple_generic("Infinity"), f64::INFINITY);
        assert_eq!(very_simple_generic("+Infinity"), f64::INFINITY);
        assert_eq!(very_simple_generic(" -Infinity "), f64::NEG_INFINITY);
        assert_eq!(very_simple_generic("1e999"), f64::INFINITY);

        for spelling in ["inf", "+inf", "infinity", "INFINITY", "nan", "NaN"] {
            assert!(very_simple_generic(spelling).is_nan(), "{}", spelling);
        }
    }

    #[test]
    fn giant_return_holds_first_argument() {
        let giant = gigantic_generic_function(true, Labeled::new("x"), C);

        assert_eq!(giant.some_giant_return_type(), &Union3::First(true));
        assert_eq!(giant.into_some_giant_return_type(), Union3::First(true));
    }

    #[test]
    fn borrowed_has_value() {
        let labeled = Labeled::new("borrowed");
        let giant = gigantic_generic_function(0.5f32, &labeled, AnyLetter::E);

        assert_eq!(giant.some_giant_return_type(), &Union3::First(0.5));
    }

    #[test]
    fn letters() {
        assert_eq!(A.letter(), 'a');
        assert_eq!(E.letter(), 'e');
        assert_eq!(AnyLetter::try_from('d'), Ok(AnyLetter::D));
        assert_eq!(AnyLetter::try_from('d').map(|l| l.letter()), Ok('d'));
        assert_eq!(AnyLetter::try_from('f'), Err(ParseLetterError('f')));
        assert_eq!(AnyLetter::try_from('A'), Err(ParseLetterError('A')));
    }

    #[test]
    fn letter_error_message() {
        assert_eq!(
            ParseLetterError('z').to_string(),
            "Not one of the letters a to e: 'z'"
        );
    }
}
