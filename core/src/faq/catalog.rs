//! The FAQ catalog: question phrasings mapped to answer templates.
//!
//! Declarative and static. Order matters: when two entries score the same,
//! the one listed first wins.

/// Identifies the answer template rendered for a matched entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    NetSavings,
    Roi,
    Payback,
    WhatIsFtz,
    ImportValue,
    TotalDuty,
    DutySavings,
    ExportDuty,
    OffSpecDuty,
    NetDuty,
    Mpf,
    MpfCap,
    WeeklyEntry,
    Hmf,
    Broker,
    OperatingCosts,
    FullyLoaded,
    SavingsPercent,
    KeyDrivers,
    NegativeSavings,
    DutyDeferral,
    ImproveSavings,
    Methodology,
}

#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub template: TemplateId,
    /// Synonymous phrasings. Stored lower-case; normalized again on load.
    pub patterns: &'static [&'static str],
}

pub static CATALOG: &[FaqEntry] = &[
    FaqEntry {
        template: TemplateId::NetSavings,
        patterns: &[
            "net savings",
            "net savings to brand",
            "what are my net savings",
            "how much will i save",
            "how much money do we save with an ftz",
            "total savings",
            "annual savings",
        ],
    },
    FaqEntry {
        template: TemplateId::Roi,
        patterns: &[
            "what is my roi",
            "roi",
            "return on investment",
            "what return do we get on the ftz program",
            "is the ftz worth the investment",
        ],
    },
    FaqEntry {
        template: TemplateId::Payback,
        patterns: &[
            "payback period",
            "what is the payback",
            "when do i break even",
            "how long to break even",
            "how long until the ftz pays for itself",
            "payback",
        ],
    },
    FaqEntry {
        template: TemplateId::WhatIsFtz,
        patterns: &[
            "what is an ftz",
            "what is a foreign trade zone",
            "what is a foreign-trade zone",
            "explain ftz",
            "ftz definition",
        ],
    },
    FaqEntry {
        template: TemplateId::ImportValue,
        patterns: &[
            "total import value",
            "annual import value",
            "how much do we import",
            "total value imported",
        ],
    },
    FaqEntry {
        template: TemplateId::TotalDuty,
        patterns: &[
            "total duty",
            "how much duty do i pay",
            "what is my total duty",
            "annual duty",
            "duty",
        ],
    },
    FaqEntry {
        template: TemplateId::DutySavings,
        patterns: &[
            "duty savings",
            "how much duty do we save",
            "duty saved",
            "how much duty does an ftz avoid",
        ],
    },
    FaqEntry {
        template: TemplateId::ExportDuty,
        patterns: &[
            "duty saved on exports",
            "duty saved of exported goods",
            "export savings",
            "how do exports save duty",
            "what about re-exported goods",
        ],
    },
    FaqEntry {
        template: TemplateId::OffSpecDuty,
        patterns: &[
            "off-spec",
            "off-spec merchandise",
            "duty saved on non-spec goods",
            "non-spec goods",
            "defective goods",
            "scrap and waste",
        ],
    },
    FaqEntry {
        template: TemplateId::NetDuty,
        patterns: &[
            "net duty",
            "total net duty",
            "net duty with ftz",
            "how much duty do we pay with an ftz",
        ],
    },
    FaqEntry {
        template: TemplateId::Mpf,
        patterns: &[
            "what is mpf",
            "mpf",
            "merchandise processing fee",
            "mpf savings",
            "how is mpf calculated",
        ],
    },
    FaqEntry {
        template: TemplateId::MpfCap,
        patterns: &[
            "mpf cap",
            "maximum mpf",
            "what is the mpf cap per entry",
            "mpf maximum per entry",
            "what is the mpf cap",
            "mpf cap amount",
        ],
    },
    FaqEntry {
        template: TemplateId::WeeklyEntry,
        patterns: &[
            "weekly entry",
            "what is weekly entry",
            "weekly consolidation",
            "consolidated entries",
            "how does weekly filing work",
            "entries per year",
            "how many entries per year",
        ],
    },
    FaqEntry {
        template: TemplateId::Hmf,
        patterns: &[
            "what is hmf",
            "hmf",
            "harbor maintenance fee",
            "does hmf change with an ftz",
        ],
    },
    FaqEntry {
        template: TemplateId::Broker,
        patterns: &[
            "broker costs",
            "broker fees",
            "customs broker",
            "broker savings",
            "how are broker fees calculated",
            "broker fee",
            "how much is the broker fee",
        ],
    },
    FaqEntry {
        template: TemplateId::OperatingCosts,
        patterns: &[
            "operating costs",
            "ftz operating costs",
            "what does it cost to run an ftz",
            "consulting management software bond",
            "ftz program costs",
            "ftz cost",
            "how much does the ftz cost",
        ],
    },
    FaqEntry {
        template: TemplateId::FullyLoaded,
        patterns: &[
            "fully loaded cost",
            "total cost with ftz",
            "total cost without ftz",
            "totals before operating costs",
        ],
    },
    FaqEntry {
        template: TemplateId::SavingsPercent,
        patterns: &[
            "percentage savings",
            "percent reduction",
            "savings percentage",
            "what percent do we save",
        ],
    },
    FaqEntry {
        template: TemplateId::KeyDrivers,
        patterns: &[
            "key drivers",
            "what drives the savings",
            "where do the savings come from",
            "biggest savings",
            "savings breakdown",
        ],
    },
    FaqEntry {
        template: TemplateId::NegativeSavings,
        patterns: &[
            "why are my savings negative",
            "why am i losing money",
            "negative savings",
            "is ftz not worth it",
        ],
    },
    FaqEntry {
        template: TemplateId::DutyDeferral,
        patterns: &[
            "duty deferral",
            "when do i pay duty",
            "can we defer duty",
            "cash flow benefit",
        ],
    },
    FaqEntry {
        template: TemplateId::ImproveSavings,
        patterns: &[
            "how can i increase savings",
            "improve savings",
            "how do i save more",
            "what should i change",
        ],
    },
    FaqEntry {
        template: TemplateId::Methodology,
        patterns: &[
            "how is this calculated",
            "methodology",
            "what formulas do you use",
            "how does the model work",
        ],
    },
];
