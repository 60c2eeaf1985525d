use std::io::{self, Write};

pub fn marker<W: Write>(out: &mut W, length: usize) -> io::Result<()> {
    writeln!(out, "# {}", length)
}

pub fn insert<W: Write>(out: &mut W, key: i32) -> io::Result<()> {
    writeln!(out, "I {}", key)
}

pub fn find<W: Write>(out: &mut W, key: i32) -> io::Result<()> {
    writeln!(out, "F {}", key)
}
