use tabled::{
    Table, Tabled,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
        themes::Colorization,
    },
};

#[derive(Tabled)]
#[tabled(rename_all = "Upper Title Case")]
pub struct GowrapVersionRow {
    pub version: String,
    pub path: String,
}

pub fn gowrap_versions(versions: &[GowrapVersionRow], long_ver: bool) {
    if long_ver {
        let mut table = Table::new(versions.iter());
        table.with(Style::blank());
        table.with(Colorization::exact([Color::FG_BRIGHT_BLUE], Rows::first()));
        table.modify(Columns::first(), Alignment::left());

        println!("{}", table);
    } else {
        versions.iter().for_each(|f| println!("{}", f.version));
    }
}
