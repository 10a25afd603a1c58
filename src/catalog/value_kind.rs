#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Absolute,   // Raw head counts
    Percentage, // Share of the region total
    Density,    // Persons per square kilometre, year-indexed
}

impl ValueKind {
    pub fn to_str(&self) -> &'static str {
        match self {
            ValueKind::Absolute => "absolute",
            ValueKind::Percentage => "percentage",
            ValueKind::Density => "density",
        }
    }

    pub fn order() -> [ValueKind; 3] {
        [ValueKind::Absolute, ValueKind::Percentage, ValueKind::Density]
    }
}
