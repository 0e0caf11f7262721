pub mod io;
pub mod polymer;

use std::ffi::OsString;
use std::path::PathBuf;

/// Where the example and the actual puzzle input are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub example: PathBuf,
    pub input: PathBuf,
}

impl Default for Inputs {
    fn default() -> Self {
        Inputs {
            example: PathBuf::from("example"),
            input: PathBuf::from("input1"),
        }
    }
}

impl Inputs {
    /// Up to two positional arguments override the example and the input in that order.
    pub fn from_args<I: IntoIterator<Item = OsString>>(args: I) -> Self {
        let mut args = args.into_iter();
        let defaults = Inputs::default();

        let example = args.next().map(PathBuf::from).unwrap_or(defaults.example);
        let input = args.next().map(PathBuf::from).unwrap_or(defaults.input);

        Inputs { example, input }
    }
}

#[test]
fn inputs_from_args() {
    let none = Inputs::from_args(Vec::new());
    assert_eq!(none, Inputs::default());

    let one = Inputs::from_args(vec![OsString::from("small")]);
    assert_eq!(one.example, PathBuf::from("small"));
    assert_eq!(one.input, PathBuf::from("input1"));

    let both = Inputs::from_args(vec![OsString::from("a"), OsString::from("b")]);
    assert_eq!(both.example, PathBuf::from("a"));
    assert_eq!(both.input, PathBuf::from("b"));
}
