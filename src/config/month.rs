// src/config/month.rs
use std::fmt;

/// The twelve months of the Solar Hijri calendar, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PersianMonth {
    #[default]
    Farvardin,
    Ordibehesht,
    Khordad,
    Tir,
    Mordad,
    Shahrivar,
    Mehr,
    Aban,
    Azar,
    Dey,
    Bahman,
    Esfand,
}

impl PersianMonth {
    pub const ALL: [PersianMonth; 12] = [
        PersianMonth::Farvardin,
        PersianMonth::Ordibehesht,
        PersianMonth::Khordad,
        PersianMonth::Tir,
        PersianMonth::Mordad,
        PersianMonth::Shahrivar,
        PersianMonth::Mehr,
        PersianMonth::Aban,
        PersianMonth::Azar,
        PersianMonth::Dey,
        PersianMonth::Bahman,
        PersianMonth::Esfand,
    ];

    /// Month label as stored in `MonthlyAssessment::month`.
    pub fn name(&self) -> &'static str {
        match self {
            PersianMonth::Farvardin => "فروردین",
            PersianMonth::Ordibehesht => "اردیبهشت",
            PersianMonth::Khordad => "خرداد",
            PersianMonth::Tir => "تیر",
            PersianMonth::Mordad => "مرداد",
            PersianMonth::Shahrivar => "شهریور",
            PersianMonth::Mehr => "مهر",
            PersianMonth::Aban => "آبان",
            PersianMonth::Azar => "آذر",
            PersianMonth::Dey => "دی",
            PersianMonth::Bahman => "بهمن",
            PersianMonth::Esfand => "اسفند",
        }
    }
}

impl fmt::Display for PersianMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
