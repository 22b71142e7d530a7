//! Client companies that post freight

pub const CLIENTS: &[&str] = &[
    "Nordfracht AG",
    "Baltic Logistics",
    "Rhein Cargo Partners",
    "Alpine Transport Group",
    "Lumen Retail",
    "Vistula Agro",
    "Hanse Foods",
    "Iberia Steelworks",
    "Danube Chemicals",
    "Flandria Distribution",
    "Meridian Pharma",
    "Kestrel Construction",
    "Orbis Electronics",
    "Continental Paper Mills",
];
