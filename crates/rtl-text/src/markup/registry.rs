//! Registry of recognized rich-text tag names.

/// How a tag is closed when the reorder engine has to synthesize the
/// closing counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosingForm {
    /// Switch tags without attributes (`<b>`, `<smallcaps>`), closed by
    /// `</name>`.
    Paired,
    /// Attribute-carrying tags (`<color=red>`, `<size=120%>`). The closing
    /// tag is a fixed template without the attribute.
    Template(&'static str),
    /// Positional directives (`<pos>`, `<space>`, `<sprite>`, `<page>`)
    /// with no closing counterpart.
    Standalone,
}

/// A recognized tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Align,
    AllCaps,
    Alpha,
    Bold,
    Color,
    CharacterSpace,
    Font,
    FontWeight,
    Gradient,
    Italic,
    Indent,
    LineHeight,
    LineIndent,
    Link,
    Lowercase,
    Margin,
    Mark,
    Monospace,
    NoBreak,
    NoParse,
    Page,
    Position,
    Rotate,
    Strikethrough,
    Size,
    SmallCaps,
    Space,
    Sprite,
    Style,
    Subscript,
    Superscript,
    Underline,
    Uppercase,
    VerticalOffset,
    Width,
}

impl TagKind {
    pub const ALL: [TagKind; 35] = [
        TagKind::Align,
        TagKind::AllCaps,
        TagKind::Alpha,
        TagKind::Bold,
        TagKind::Color,
        TagKind::CharacterSpace,
        TagKind::Font,
        TagKind::FontWeight,
        TagKind::Gradient,
        TagKind::Italic,
        TagKind::Indent,
        TagKind::LineHeight,
        TagKind::LineIndent,
        TagKind::Link,
        TagKind::Lowercase,
        TagKind::Margin,
        TagKind::Mark,
        TagKind::Monospace,
        TagKind::NoBreak,
        TagKind::NoParse,
        TagKind::Page,
        TagKind::Position,
        TagKind::Rotate,
        TagKind::Strikethrough,
        TagKind::Size,
        TagKind::SmallCaps,
        TagKind::Space,
        TagKind::Sprite,
        TagKind::Style,
        TagKind::Subscript,
        TagKind::Superscript,
        TagKind::Underline,
        TagKind::Uppercase,
        TagKind::VerticalOffset,
        TagKind::Width,
    ];

    /// Look up a tag by name, ignoring ASCII case.
    ///
    /// A `#rrggbb`-style name is the colour shorthand.
    pub fn from_name(name: &str) -> Option<TagKind> {
        if name.starts_with('#') {
            return Some(TagKind::Color);
        }
        TagKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            TagKind::Align => "align",
            TagKind::AllCaps => "allcaps",
            TagKind::Alpha => "alpha",
            TagKind::Bold => "b",
            TagKind::Color => "color",
            TagKind::CharacterSpace => "cspace",
            TagKind::Font => "font",
            TagKind::FontWeight => "font-weight",
            TagKind::Gradient => "gradient",
            TagKind::Italic => "i",
            TagKind::Indent => "indent",
            TagKind::LineHeight => "line-height",
            TagKind::LineIndent => "line-indent",
            TagKind::Link => "link",
            TagKind::Lowercase => "lowercase",
            TagKind::Margin => "margin",
            TagKind::Mark => "mark",
            TagKind::Monospace => "mspace",
            TagKind::NoBreak => "nobr",
            TagKind::NoParse => "noparse",
            TagKind::Page => "page",
            TagKind::Position => "pos",
            TagKind::Rotate => "rotate",
            TagKind::Strikethrough => "s",
            TagKind::Size => "size",
            TagKind::SmallCaps => "smallcaps",
            TagKind::Space => "space",
            TagKind::Sprite => "sprite",
            TagKind::Style => "style",
            TagKind::Subscript => "sub",
            TagKind::Superscript => "sup",
            TagKind::Underline => "u",
            TagKind::Uppercase => "uppercase",
            TagKind::VerticalOffset => "voffset",
            TagKind::Width => "width",
        }
    }

    pub fn closing_form(self) -> ClosingForm {
        match self {
            TagKind::AllCaps
            | TagKind::Bold
            | TagKind::Italic
            | TagKind::Lowercase
            | TagKind::NoBreak
            | TagKind::NoParse
            | TagKind::Strikethrough
            | TagKind::SmallCaps
            | TagKind::Subscript
            | TagKind::Superscript
            | TagKind::Underline
            | TagKind::Uppercase => ClosingForm::Paired,
            TagKind::Page | TagKind::Position | TagKind::Space | TagKind::Sprite => {
                ClosingForm::Standalone
            }
            TagKind::Align => ClosingForm::Template("</align>"),
            TagKind::Alpha => ClosingForm::Template("</alpha>"),
            TagKind::Color => ClosingForm::Template("</color>"),
            TagKind::CharacterSpace => ClosingForm::Template("</cspace>"),
            TagKind::Font => ClosingForm::Template("</font>"),
            TagKind::FontWeight => ClosingForm::Template("</font-weight>"),
            TagKind::Gradient => ClosingForm::Template("</gradient>"),
            TagKind::Indent => ClosingForm::Template("</indent>"),
            TagKind::LineHeight => ClosingForm::Template("</line-height>"),
            TagKind::LineIndent => ClosingForm::Template("</line-indent>"),
            TagKind::Link => ClosingForm::Template("</link>"),
            TagKind::Margin => ClosingForm::Template("</margin>"),
            TagKind::Mark => ClosingForm::Template("</mark>"),
            TagKind::Monospace => ClosingForm::Template("</mspace>"),
            TagKind::Rotate => ClosingForm::Template("</rotate>"),
            TagKind::Size => ClosingForm::Template("</size>"),
            TagKind::Style => ClosingForm::Template("</style>"),
            TagKind::VerticalOffset => ClosingForm::Template("</voffset>"),
            TagKind::Width => ClosingForm::Template("</width>"),
        }
    }

    /// Text of the closing tag to synthesize, if the tag has one.
    pub fn closing_tag(self) -> Option<String> {
        match self.closing_form() {
            ClosingForm::Paired => Some(format!("</{}>", self.name())),
            ClosingForm::Template(template) => Some(template.to_string()),
            ClosingForm::Standalone => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in TagKind::ALL {
            assert_eq!(TagKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn lookup_ignores_case_and_knows_colour_shorthand() {
        assert_eq!(TagKind::from_name("COLOR"), Some(TagKind::Color));
        assert_eq!(TagKind::from_name("#ff0000"), Some(TagKind::Color));
        assert_eq!(TagKind::from_name("blink"), None);
        assert_eq!(TagKind::from_name(""), None);
    }

    #[test]
    fn closing_tags() {
        assert_eq!(TagKind::Bold.closing_tag().as_deref(), Some("</b>"));
        assert_eq!(TagKind::Color.closing_tag().as_deref(), Some("</color>"));
        assert_eq!(TagKind::Size.closing_form(), ClosingForm::Template("</size>"));
        assert_eq!(TagKind::Sprite.closing_tag(), None);
        assert_eq!(TagKind::Position.closing_form(), ClosingForm::Standalone);
    }
}
