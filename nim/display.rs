//! Display utilities

use std::fmt::{self, Display, Write};

fn sep(w: &mut impl Write, separator: &str, xs: &[impl Display]) -> fmt::Result {
    for (idx, v) in xs.iter().enumerate() {
        if idx != 0 {
            write!(w, "{}", separator)?;
        }
        write!(w, "{}", v)?;
    }
    Ok(())
}

#[inline]
pub fn commas(w: &mut impl Write, xs: &[impl Display]) -> fmt::Result {
    sep(w, ", ", xs)
}

pub fn brackets<W>(w: &mut W, middle: impl FnOnce(&mut W) -> fmt::Result) -> fmt::Result
where
    W: Write,
{
    write!(w, "[")?;
    middle(w)?;
    write!(w, "]")
}

#[test]
fn bracketed_commas() {
    let mut buf = String::new();
    brackets(&mut buf, |w| commas(w, &[3, 4, 5])).unwrap();
    assert_eq!(buf, "[3, 4, 5]");

    let mut buf = String::new();
    brackets(&mut buf, |w| commas(w, &[7])).unwrap();
    assert_eq!(buf, "[7]");
}
