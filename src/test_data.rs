#[cfg(test)]
pub const HELLO_POST: &str = "# Hello World\n## A subtitle\n![](img.png)";

#[cfg(test)]
pub const LONG_POST: &str = "# Notes from the workshop

Some text before the first section.

### Day one

![The studio](https://vivian-green.github.io/images/studio.jpg)

Café, croissants and a lot of clay. Ça commence bien.

### Day two

More clay.
";

#[cfg(test)]
pub const NO_HEADINGS_POST: &str = "Just a quick note without any headings.

Nothing else to see here.
";

#[cfg(test)]
pub const ESCAPE_POST: &str = "# Fish <&> \"Chips\"
## Tom's 'best' dish
";
