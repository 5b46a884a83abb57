/// Descriptive record for one supported region, shared by the chart catalog
/// and the map registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChoroplethMeta {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
    /// What the geographic column holds, e.g. "State names".
    pub geo_label: &'static str,
    /// Suggested value range for sample data.
    pub domain: Option<(f64, f64)>,
}

impl ChoroplethMeta {
    /// Title without the trailing " Map".
    pub fn place(&self) -> &'static str {
        self.title.strip_suffix(" Map").unwrap_or(self.title)
    }
}

/// Look up a metadata record by key.
pub fn meta(key: &str) -> Option<&'static ChoroplethMeta> {
    CHOROPLETH_META.iter().find(|m| m.key == key)
}

pub static CHOROPLETH_META: &[ChoroplethMeta] = &[
    ChoroplethMeta {
        key: "india",
        title: "India Map",
        description: "Display data across Indian states using color intensity",
        examples: &["Population density", "Literacy rates", "Economic indicators"],
        geo_label: "State names",
        domain: Some((50.0, 150.0)),
    },
    ChoroplethMeta {
        key: "usa",
        title: "USA Map",
        description: "Display data across USA states using color intensity",
        examples: &["Population density", "Literacy rates", "Economic indicators"],
        geo_label: "State names",
        domain: Some((50.0, 150.0)),
    },
    ChoroplethMeta {
        key: "delhi",
        title: "Delhi Map",
        description: "Display data across Delhi and its districts using color intensity",
        examples: &["City population", "COVID-19 cases", "Economic indicators"],
        geo_label: "District names",
        domain: Some((70.0, 100.0)),
    },
    ChoroplethMeta {
        key: "afghanistan",
        title: "Afghanistan Map",
        description: "Display data across Afghan provinces using color intensity",
        examples: &["Security index", "Education access", "Population density"],
        geo_label: "Province names",
        domain: Some((50.0, 100.0)),
    },
    ChoroplethMeta {
        key: "albania",
        title: "Albania Map",
        description: "Display data across Albanian counties using color intensity",
        examples: &["GDP per capita", "Health statistics", "Employment rate"],
        geo_label: "County names",
        domain: Some((60.0, 90.0)),
    },
    ChoroplethMeta {
        key: "indonesia",
        title: "Indonesia Map",
        description: "Display data across Indonesian provinces",
        examples: &["Population density", "GDP per capita", "Employment rate"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "iran",
        title: "Iran Map",
        description: "Display data across Iranian provinces",
        examples: &["Healthcare access", "Education index", "Unemployment rate"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "iraq",
        title: "Iraq Map",
        description: "Display data across Iraqi governorates",
        examples: &["Security index", "Population density", "Urbanization level"],
        geo_label: "Governorate names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "ireland",
        title: "Ireland Map",
        description: "Display data across Irish counties",
        examples: &["Housing quality", "Tourism revenue", "Healthcare access"],
        geo_label: "County names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "israel",
        title: "Israel Map",
        description: "Display data across Israeli districts",
        examples: &["Crime index", "Population density", "Education index"],
        geo_label: "District names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "italy",
        title: "Italy Map",
        description: "Display data across Italian regions",
        examples: &["GDP per capita", "Tourism revenue", "Unemployment rate"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "ivorycoast",
        title: "Ivory Coast Map",
        description: "Display data across districts",
        examples: &["Education access", "Crime index", "Urbanization level"],
        geo_label: "District names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "jamaica",
        title: "Jamaica Map",
        description: "Display data across Jamaican parishes",
        examples: &["Tourism revenue", "Healthcare access", "Employment rate"],
        geo_label: "Parish names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "japan",
        title: "Japan Map",
        description: "Display data across Japanese prefectures",
        examples: &["Population density", "Internet penetration", "Life expectancy"],
        geo_label: "Prefecture names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "jordan",
        title: "Jordan Map",
        description: "Display data across Jordanian governorates",
        examples: &["Literacy rate", "Security index", "Healthcare access"],
        geo_label: "Governorate names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "kazakhstan",
        title: "Kazakhstan Map",
        description: "Display data across regions of Kazakhstan",
        examples: &["Economic activity", "Population growth", "Education levels"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "kenya",
        title: "Kenya Map",
        description: "Display data across Kenyan counties",
        examples: &["Agricultural output", "Healthcare facilities", "Literacy rate"],
        geo_label: "County names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "kuwait",
        title: "Kuwait Map",
        description: "Display data across Kuwaiti governorates",
        examples: &["Healthcare access", "Population distribution", "Infrastructure index"],
        geo_label: "Governorate names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "kyrgyzstan",
        title: "Kyrgyzstan Map",
        description: "Display data across Kyrgyz regions",
        examples: &["Education quality", "Agricultural output", "Internet access"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "laos",
        title: "Laos Map",
        description: "Display data across Lao provinces",
        examples: &["Poverty rate", "Healthcare coverage", "School enrollment"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "latvia",
        title: "Latvia Map",
        description: "Display data across Latvian municipalities",
        examples: &["Population change", "Green space per capita", "Income levels"],
        geo_label: "Municipality names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "lebanon",
        title: "Lebanon Map",
        description: "Display data across Lebanese governorates",
        examples: &["Population density", "Healthcare availability", "Urbanization rate"],
        geo_label: "Governorate names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "liberia",
        title: "Liberia Map",
        description: "Display data across counties",
        examples: &["Healthcare availability", "Economic development", "Population density"],
        geo_label: "County names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "libya",
        title: "Libya Map",
        description: "Display data across Libyan districts",
        examples: &["Security rating", "Public service access", "Literacy rate"],
        geo_label: "District names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "liechtenstein",
        title: "Liechtenstein Map",
        description: "Display data across municipalities",
        examples: &["Population distribution", "Housing availability", "Employment statistics"],
        geo_label: "Municipality names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "lithuania",
        title: "Lithuania Map",
        description: "Display data across counties",
        examples: &["Economic indicators", "Health access", "Education statistics"],
        geo_label: "County names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "luxembourg",
        title: "Luxembourg Map",
        description: "Display data across communes",
        examples: &["Green space availability", "Local governance quality", "Housing density"],
        geo_label: "Commune names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "macedonia",
        title: "North Macedonia Map",
        description: "Display data across statistical regions",
        examples: &["Economic activity", "Health outcomes", "Education levels"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "madagascar",
        title: "Madagascar Map",
        description: "Display data across regions of Madagascar",
        examples: &["Biodiversity index", "Agricultural output", "Access to education"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "malawi",
        title: "Malawi Map",
        description: "Display data across districts of Malawi",
        examples: &["Food security", "Public health facilities", "Literacy rate"],
        geo_label: "District names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "malaysia",
        title: "Malaysia Map",
        description: "Display data across Malaysian states",
        examples: &["Population density", "GDP per capita", "Internet penetration"],
        geo_label: "State names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "mali",
        title: "Mali Map",
        description: "Display data across regions of Mali",
        examples: &["Access to clean water", "Economic development", "Security index"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "malta",
        title: "Malta Map",
        description: "Display data across Maltese local councils",
        examples: &["Tourism traffic", "Healthcare access", "Population trends"],
        geo_label: "Council names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "mauritania",
        title: "Mauritania Map",
        description: "Display data across Mauritanian regions",
        examples: &["Resource distribution", "Education access", "Health metrics"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "mauritius",
        title: "Mauritius Map",
        description: "Display data across districts of Mauritius",
        examples: &["Employment levels", "Internet access", "Environmental quality"],
        geo_label: "District names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "mexico",
        title: "Mexico Map",
        description: "Display data across Mexican states",
        examples: &["Literacy rate", "Healthcare index", "Population growth"],
        geo_label: "State names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "moldova",
        title: "Moldova Map",
        description: "Display data across Moldovan districts",
        examples: &["Agricultural productivity", "Access to utilities", "Population density"],
        geo_label: "District names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "mongolia",
        title: "Mongolia Map",
        description: "Display data across provinces (aimags)",
        examples: &["Livestock density", "Education access", "Mobile connectivity"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "montenegro",
        title: "Montenegro Map",
        description: "Display data across municipalities",
        examples: &["Tourism rate", "Population growth", "Economic indicators"],
        geo_label: "Municipality names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "montserrat",
        title: "Montserrat Map",
        description: "Display data across Montserrat parishes",
        examples: &["Public health metrics", "Education availability", "Population change"],
        geo_label: "Parish names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "morocco",
        title: "Morocco Map",
        description: "Display data across Moroccan regions",
        examples: &["Employment rate", "Access to transportation", "Poverty rate"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "mozambique",
        title: "Mozambique Map",
        description: "Display data across provinces",
        examples: &["School access", "Healthcare coverage", "Natural resource index"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "myanmar",
        title: "Myanmar Map",
        description: "Display data across Myanmar states/regions",
        examples: &["Conflict risk", "Education statistics", "Infrastructure level"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "nauru",
        title: "Nauru Map",
        description: "Display data across Nauru districts",
        examples: &["Population per district", "Education access", "Water supply status"],
        geo_label: "District names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "nepal",
        title: "Nepal Map",
        description: "Display data across Nepalese provinces",
        examples: &["Tourism rates", "Infrastructure quality", "Literacy level"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "netherlands",
        title: "Netherlands Map",
        description: "Display data across Dutch provinces",
        examples: &["Internet penetration", "Public transport access", "Household income"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "newcaledonia",
        title: "New Caledonia Map",
        description: "Display data across provinces",
        examples: &["Population spread", "Environmental indicators", "Education enrollment"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "newzealand",
        title: "New Zealand Map",
        description: "Display data across New Zealand regions",
        examples: &["Healthcare distribution", "Climate vulnerability", "Agricultural output"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "nicaragua",
        title: "Nicaragua Map",
        description: "Display data across Nicaraguan departments",
        examples: &["School access", "Agricultural zones", "Public transport"],
        geo_label: "Department names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "niger",
        title: "Niger Map",
        description: "Display data across regions of Niger",
        examples: &["Security index", "Education outreach", "Food supply chains"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "nigeria",
        title: "Nigeria Map",
        description: "Display data across Nigerian states",
        examples: &["Electricity access", "Literacy rate", "Employment level"],
        geo_label: "State names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "northkorea",
        title: "North Korea Map",
        description: "Display data across provinces",
        examples: &["Industrial activity", "Transport access", "Healthcare services"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "norway",
        title: "Norway Map",
        description: "Display data across Norwegian counties",
        examples: &["Energy usage", "Environmental scores", "Population aging rate"],
        geo_label: "County names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "oman",
        title: "Oman Map",
        description: "Display data across Omani governorates",
        examples: &["Road infrastructure", "Employment rate", "Access to education"],
        geo_label: "Governorate names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "pakistan",
        title: "Pakistan Map",
        description: "Display data across Pakistani provinces",
        examples: &["Security index", "Water supply", "Access to healthcare"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "palestine",
        title: "Palestine Map",
        description: "Display data across Palestinian governorates",
        examples: &["Housing density", "Refugee population", "Public service access"],
        geo_label: "Governorate names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "panama",
        title: "Panama Map",
        description: "Display data across Panamanian provinces",
        examples: &["Trade zones", "Infrastructure levels", "Population distribution"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "papuanewguinea",
        title: "Papua New Guinea Map",
        description: "Display data across provinces",
        examples: &["Cultural diversity index", "Healthcare infrastructure", "Schooling rate"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "paraguay",
        title: "Paraguay Map",
        description: "Display data across departments",
        examples: &["Agricultural activity", "Road density", "Mobile penetration"],
        geo_label: "Department names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "peru",
        title: "Peru Map",
        description: "Display data across regions of Peru",
        examples: &["Tourism income", "Literacy level", "Health service access"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "philippines",
        title: "Philippines Map",
        description: "Display data across Philippine regions",
        examples: &["Population distribution", "Disaster risk index", "Internet access"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "pitcairnislands",
        title: "Pitcairn Islands Map",
        description: "Display data across islands",
        examples: &["Island population", "Maritime access", "Electricity supply"],
        geo_label: "Island names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "poland",
        title: "Poland Map",
        description: "Display data across Polish voivodeships",
        examples: &["Economic growth rate", "Educational index", "Urbanization level"],
        geo_label: "Voivodeship names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "puertorico",
        title: "Puerto Rico Map",
        description: "Display data across Puerto Rican municipalities",
        examples: &["Healthcare access", "Income distribution", "Internet usage"],
        geo_label: "Municipality names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "qatar",
        title: "Qatar Map",
        description: "Display data across municipalities",
        examples: &["Infrastructure projects", "Population growth", "Economic zones"],
        geo_label: "Municipality names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "romania",
        title: "Romania Map",
        description: "Display data across Romanian counties",
        examples: &["Unemployment rate", "Educational facilities", "Road quality"],
        geo_label: "County names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "russia",
        title: "Russia Map",
        description: "Display data across Russian federal subjects",
        examples: &["GDP distribution", "Transport networks", "Climate data"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "rwanda",
        title: "Rwanda Map",
        description: "Display data across Rwandan districts",
        examples: &["Healthcare clinics", "Electricity access", "Population statistics"],
        geo_label: "District names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "saintkittsandnevis",
        title: "Saint Kitts and Nevis Map",
        description: "Display data across parishes",
        examples: &["Tourism statistics", "Energy usage", "Educational access"],
        geo_label: "Parish names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "saintmartinfrench",
        title: "Saint Martin (French) Map",
        description: "Display data across quarters",
        examples: &["Education levels", "Income data", "Infrastructure access"],
        geo_label: "Quarter names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "saintvincentandgrenadines",
        title: "Saint Vincent and the Grenadines Map",
        description: "Display data across parishes",
        examples: &["Tourism revenue", "Health services", "Road network quality"],
        geo_label: "Parish names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "saotomeandprincipe",
        title: "São Tomé and Príncipe Map",
        description: "Display data across districts",
        examples: &["Public service access", "Population density", "Literacy levels"],
        geo_label: "District names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "saudiaarabia",
        title: "Saudi Arabia Map",
        description: "Display data across provinces",
        examples: &["Economic activity", "Healthcare availability", "Transport facilities"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "senegal",
        title: "Senegal Map",
        description: "Display data across regions",
        examples: &["Education rates", "Electricity distribution", "Sanitation coverage"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "serbia",
        title: "Serbia Map",
        description: "Display data across Serbian districts",
        examples: &["Population size", "Income levels", "Healthcare services"],
        geo_label: "District names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "seychelles",
        title: "Seychelles Map",
        description: "Display data across districts",
        examples: &["Tourism activity", "Employment rates", "Public safety indicators"],
        geo_label: "District names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "sierraleone",
        title: "Sierra Leone Map",
        description: "Display data across provinces",
        examples: &["Healthcare coverage", "School enrollment", "Agricultural output"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "singapore",
        title: "Singapore Map",
        description: "Display data across Singapore districts",
        examples: &["Population density", "Transport coverage", "Public housing data"],
        geo_label: "District names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "slovakia",
        title: "Slovakia Map",
        description: "Display data across Slovak regions",
        examples: &["Employment rate", "Internet speed", "Transport access"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "slovenia",
        title: "Slovenia Map",
        description: "Display data across statistical regions",
        examples: &["Public transport", "Literacy level", "Public services"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "solomonislands",
        title: "Solomon Islands Map",
        description: "Display data across provinces",
        examples: &["Access to clean water", "Education quality", "Healthcare access"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "somalia",
        title: "Somalia Map",
        description: "Display data across federal states",
        examples: &["Security index", "Education coverage", "Basic amenities access"],
        geo_label: "State names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "southafrica",
        title: "South Africa Map",
        description: "Display data across provinces",
        examples: &["Housing quality", "Employment statistics", "Water supply"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "southkorea",
        title: "South Korea Map",
        description: "Display data across South Korean provinces",
        examples: &["Internet speed", "Public service access", "GDP contribution"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "southsudan",
        title: "South Sudan Map",
        description: "Display data across states",
        examples: &["Displacement levels", "Public services", "Access to education"],
        geo_label: "State names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "spain",
        title: "Spain Map",
        description: "Display data across autonomous communities",
        examples: &["GDP by region", "Employment rate", "Tourism stats"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "srilanka",
        title: "Sri Lanka Map",
        description: "Display data across provinces",
        examples: &["Literacy levels", "Healthcare access", "Electricity availability"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "stmartindutch",
        title: "Sint Maarten Map",
        description: "Display data across districts",
        examples: &["Employment data", "Education statistics", "Public infrastructure"],
        geo_label: "District names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "sudan",
        title: "Sudan Map",
        description: "Display data across states",
        examples: &["Security conditions", "Educational reach", "Electricity supply"],
        geo_label: "State names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "suriname",
        title: "Suriname Map",
        description: "Display data across districts",
        examples: &["Housing conditions", "Water access", "Transportation coverage"],
        geo_label: "District names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "swaziland",
        title: "Eswatini Map",
        description: "Display data across regions",
        examples: &["Primary education rate", "Water infrastructure", "Electric grid access"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "switzerland",
        title: "Switzerland Map",
        description: "Display data across cantons",
        examples: &["Economic strength", "Healthcare coverage", "Tourism rates"],
        geo_label: "Canton names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "syria",
        title: "Syria Map",
        description: "Display data across Syrian governorates",
        examples: &["Population movement", "Healthcare services", "Infrastructure coverage"],
        geo_label: "Governorate names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "taiwan",
        title: "Taiwan Map",
        description: "Display data across cities and counties",
        examples: &["Tech exports", "Population density", "Environmental indicators"],
        geo_label: "County names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "tajikistan",
        title: "Tajikistan Map",
        description: "Display data across provinces",
        examples: &["Infrastructure access", "Educational attainment", "Water access"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "tanzania",
        title: "Tanzania Map",
        description: "Display data across Tanzanian regions",
        examples: &["Wildlife presence", "Healthcare index", "Literacy rates"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "thailand",
        title: "Thailand Map",
        description: "Display data across Thai provinces",
        examples: &["Tourism income", "Education coverage", "Economic contribution"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "timorleste",
        title: "Timor-Leste Map",
        description: "Display data across municipalities",
        examples: &["Water supply", "Healthcare access", "School enrollment"],
        geo_label: "Municipality names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "togo",
        title: "Togo Map",
        description: "Display data across regions",
        examples: &["Agriculture statistics", "Population coverage", "Education reach"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "tonga",
        title: "Tonga Map",
        description: "Display data across island divisions",
        examples: &["Climate conditions", "Agricultural output", "Tourism statistics"],
        geo_label: "Division names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "trinidadandtobago",
        title: "Trinidad and Tobago Map",
        description: "Display data across municipalities",
        examples: &["Oil production", "Employment stats", "Education coverage"],
        geo_label: "Municipality names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "tunisia",
        title: "Tunisia Map",
        description: "Display data across governorates",
        examples: &["Economic activity", "Education access", "Transport infrastructure"],
        geo_label: "Governorate names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "turkemenistan",
        title: "Turkmenistan Map",
        description: "Display data across provinces",
        examples: &["Energy output", "Education quality", "Population coverage"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "turkey",
        title: "Turkey Map",
        description: "Display data across Turkish provinces",
        examples: &["Literacy rate", "Employment rate", "Public healthcare"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "turksandcaicos",
        title: "Turks and Caicos Map",
        description: "Display data across districts",
        examples: &["Tourism revenue", "Housing access", "Population stats"],
        geo_label: "District names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "uganda",
        title: "Uganda Map",
        description: "Display data across Ugandan regions",
        examples: &["Educational enrollment", "Healthcare access", "Electricity availability"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "ukraine",
        title: "Ukraine Map",
        description: "Display data across Ukrainian oblasts",
        examples: &["Conflict status", "Population data", "Healthcare services"],
        geo_label: "Oblast names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "unitedarabemirates",
        title: "United Arab Emirates Map",
        description: "Display data across emirates",
        examples: &["Oil production", "Transport coverage", "Employment data"],
        geo_label: "Emirate names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "uruguay",
        title: "Uruguay Map",
        description: "Display data across departments",
        examples: &["Agricultural yield", "Internet access", "Educational reach"],
        geo_label: "Department names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "uzbekistan",
        title: "Uzbekistan Map",
        description: "Display data across regions",
        examples: &["Agriculture output", "Transport access", "Public education levels"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "vanuatu",
        title: "Vanuatu Map",
        description: "Display data across provinces",
        examples: &["Disaster recovery", "Education distribution", "Healthcare access"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "venezuela",
        title: "Venezuela Map",
        description: "Display data across Venezuelan states",
        examples: &["Oil production", "Electric grid coverage", "Population stats"],
        geo_label: "State names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "vietnam",
        title: "Vietnam Map",
        description: "Display data across provinces",
        examples: &["Industrial growth", "Tourism zones", "Education levels"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "virginislands",
        title: "Virgin Islands Map",
        description: "Display data across island districts",
        examples: &["Tourism income", "Healthcare centers", "Housing availability"],
        geo_label: "District names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "westernsahara",
        title: "Western Sahara Map",
        description: "Display data across regions",
        examples: &["Population movement", "Access to water", "Infrastructure presence"],
        geo_label: "Region names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "yemen",
        title: "Yemen Map",
        description: "Display data across governorates",
        examples: &["Healthcare crisis", "Population estimates", "Food distribution"],
        geo_label: "Governorate names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "zambia",
        title: "Zambia Map",
        description: "Display data across provinces",
        examples: &["Education outreach", "Healthcare coverage", "Road networks"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
    ChoroplethMeta {
        key: "zimbwabe",
        title: "Zimbabwe Map",
        description: "Display data across provinces",
        examples: &["Public health access", "Literacy programs", "Electricity availability"],
        geo_label: "Province names",
        domain: Some((0.0, 100.0)),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = CHOROPLETH_META.iter().map(|m| m.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), CHOROPLETH_META.len());
        assert_eq!(CHOROPLETH_META.len(), 118);
    }

    #[test]
    fn domains_are_ordered() {
        for m in CHOROPLETH_META {
            if let Some((lo, hi)) = m.domain {
                assert!(lo < hi, "{}", m.key);
            }
        }
    }

    #[test]
    fn place_drops_map_suffix() {
        assert_eq!(meta("india").map(ChoroplethMeta::place), Some("India"));
        assert_eq!(meta("delhi").map(|m| m.geo_label), Some("District names"));
        assert!(meta("atlantis").is_none());
    }
}
