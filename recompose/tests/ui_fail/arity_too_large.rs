recompose_macros::arities!(13);

fn main() {}
