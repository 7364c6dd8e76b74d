use clap::ValueEnum;
use tabled::{
    Table,
    builder::Builder,
    settings::{Panel, Style, object::Rows, style::LineText},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum TabStyle {
    Rounded,
    Modern,
    ModernRounded,
    Ascii,
    AsciiRounded,
    Psql,
    Markdown,
    Extended,
    Sharp,
    Dots,
    ReStructuredText,
    Blank,
    Empty,
}

impl TabStyle {
    pub(crate) fn apply(self, table: &mut Table) {
        match self {
            Self::Rounded => table.with(Style::rounded()),
            Self::Modern => table.with(Style::modern()),
            Self::ModernRounded => table.with(Style::modern_rounded()),
            Self::Ascii => table.with(Style::ascii()),
            Self::AsciiRounded => table.with(Style::ascii_rounded()),
            Self::Psql => table.with(Style::psql()),
            Self::Markdown => table.with(Style::markdown()),
            Self::Extended => table.with(Style::extended()),
            Self::Sharp => table.with(Style::sharp()),
            Self::Dots => table.with(Style::dots()),
            Self::ReStructuredText => table.with(Style::re_structured_text()),
            Self::Blank => table.with(Style::blank()),
            Self::Empty => table.with(Style::empty()),
        };
    }
}

/// Style `table` and write `title` into its top border.
pub(crate) fn finish(mut table: Table, style: TabStyle, title: &str) -> String {
    style.apply(&mut table);
    table.with(LineText::new(format!(" {title} "), Rows::first()).offset(1));
    table.to_string()
}

/// Placeholder table for a section with no rows.
pub(crate) fn empty_section(style: TabStyle, title: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record(["(none)"]);
    let mut table = builder.build();
    style.apply(&mut table);
    table.with(Panel::header(format!(" {title} ")));
    table.to_string()
}
