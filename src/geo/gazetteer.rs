//! Static location tables.
//!
//! A deliberately small gazetteer tuned for the locations that actually show
//! up in developer profiles: countries, major tech-hub cities, and US states /
//! Canadian provinces. Lookup keys are pre-normalized (lowercase, no
//! punctuation); `display` is the human-readable form.

#[derive(Debug, Clone, Copy)]
pub struct CountryRecord {
    pub code: &'static str,
    pub name: &'static str,
    pub timezone: &'static str,
    pub offset_secs: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct PlaceRecord {
    /// Normalized lookup key.
    pub name: &'static str,
    pub display: &'static str,
    /// ISO 3166-1 alpha-2 code of the containing country.
    pub country: &'static str,
    /// Approximate population, used as the deterministic tie-break between
    /// same-named places.
    pub population: u64,
    pub timezone: &'static str,
    pub offset_secs: i32,
}

/// Special-case aliases applied before any table lookup.
pub static ALIASES: &[(&str, &str)] = &[
    ("usa", "united states"),
    ("u s a", "united states"),
    ("u s", "united states"),
    ("america", "united states"),
    ("uk", "united kingdom"),
    ("great britain", "united kingdom"),
    ("nyc", "new york"),
    ("new york city", "new york"),
    ("sf", "san francisco"),
    ("la", "los angeles"),
    ("dc", "washington"),
    ("d c", "washington"),
    ("washington dc", "washington"),
    ("washington d c", "washington"),
    ("deutschland", "germany"),
    ("holland", "netherlands"),
    ("the netherlands", "netherlands"),
    ("brasil", "brazil"),
    ("korea", "south korea"),
    ("uae", "united arab emirates"),
    ("kiev", "kyiv"),
    ("bengaluru", "bangalore"),
    ("bombay", "mumbai"),
    ("new delhi", "delhi"),
    ("saigon", "ho chi minh"),
    ("czech republic", "czechia"),
];

pub static COUNTRIES: &[CountryRecord] = &[
    CountryRecord { code: "US", name: "United States", timezone: "America/New_York", offset_secs: -18_000 },
    CountryRecord { code: "GB", name: "United Kingdom", timezone: "Europe/London", offset_secs: 0 },
    CountryRecord { code: "CA", name: "Canada", timezone: "America/Toronto", offset_secs: -18_000 },
    CountryRecord { code: "DE", name: "Germany", timezone: "Europe/Berlin", offset_secs: 3_600 },
    CountryRecord { code: "FR", name: "France", timezone: "Europe/Paris", offset_secs: 3_600 },
    CountryRecord { code: "IN", name: "India", timezone: "Asia/Kolkata", offset_secs: 19_800 },
    CountryRecord { code: "CN", name: "China", timezone: "Asia/Shanghai", offset_secs: 28_800 },
    CountryRecord { code: "JP", name: "Japan", timezone: "Asia/Tokyo", offset_secs: 32_400 },
    CountryRecord { code: "AU", name: "Australia", timezone: "Australia/Sydney", offset_secs: 36_000 },
    CountryRecord { code: "BR", name: "Brazil", timezone: "America/Sao_Paulo", offset_secs: -10_800 },
    CountryRecord { code: "NL", name: "Netherlands", timezone: "Europe/Amsterdam", offset_secs: 3_600 },
    CountryRecord { code: "SE", name: "Sweden", timezone: "Europe/Stockholm", offset_secs: 3_600 },
    CountryRecord { code: "NO", name: "Norway", timezone: "Europe/Oslo", offset_secs: 3_600 },
    CountryRecord { code: "FI", name: "Finland", timezone: "Europe/Helsinki", offset_secs: 7_200 },
    CountryRecord { code: "DK", name: "Denmark", timezone: "Europe/Copenhagen", offset_secs: 3_600 },
    CountryRecord { code: "PL", name: "Poland", timezone: "Europe/Warsaw", offset_secs: 3_600 },
    CountryRecord { code: "ES", name: "Spain", timezone: "Europe/Madrid", offset_secs: 3_600 },
    CountryRecord { code: "PT", name: "Portugal", timezone: "Europe/Lisbon", offset_secs: 0 },
    CountryRecord { code: "IT", name: "Italy", timezone: "Europe/Rome", offset_secs: 3_600 },
    CountryRecord { code: "CH", name: "Switzerland", timezone: "Europe/Zurich", offset_secs: 3_600 },
    CountryRecord { code: "AT", name: "Austria", timezone: "Europe/Vienna", offset_secs: 3_600 },
    CountryRecord { code: "BE", name: "Belgium", timezone: "Europe/Brussels", offset_secs: 3_600 },
    CountryRecord { code: "IE", name: "Ireland", timezone: "Europe/Dublin", offset_secs: 0 },
    CountryRecord { code: "CZ", name: "Czechia", timezone: "Europe/Prague", offset_secs: 3_600 },
    CountryRecord { code: "RU", name: "Russia", timezone: "Europe/Moscow", offset_secs: 10_800 },
    CountryRecord { code: "UA", name: "Ukraine", timezone: "Europe/Kyiv", offset_secs: 7_200 },
    CountryRecord { code: "TR", name: "Turkey", timezone: "Europe/Istanbul", offset_secs: 10_800 },
    CountryRecord { code: "IL", name: "Israel", timezone: "Asia/Jerusalem", offset_secs: 7_200 },
    CountryRecord { code: "AE", name: "United Arab Emirates", timezone: "Asia/Dubai", offset_secs: 14_400 },
    CountryRecord { code: "SG", name: "Singapore", timezone: "Asia/Singapore", offset_secs: 28_800 },
    CountryRecord { code: "KR", name: "South Korea", timezone: "Asia/Seoul", offset_secs: 32_400 },
    CountryRecord { code: "TW", name: "Taiwan", timezone: "Asia/Taipei", offset_secs: 28_800 },
    CountryRecord { code: "HK", name: "Hong Kong", timezone: "Asia/Hong_Kong", offset_secs: 28_800 },
    CountryRecord { code: "ID", name: "Indonesia", timezone: "Asia/Jakarta", offset_secs: 25_200 },
    CountryRecord { code: "TH", name: "Thailand", timezone: "Asia/Bangkok", offset_secs: 25_200 },
    CountryRecord { code: "VN", name: "Vietnam", timezone: "Asia/Ho_Chi_Minh", offset_secs: 25_200 },
    CountryRecord { code: "PH", name: "Philippines", timezone: "Asia/Manila", offset_secs: 28_800 },
    CountryRecord { code: "MY", name: "Malaysia", timezone: "Asia/Kuala_Lumpur", offset_secs: 28_800 },
    CountryRecord { code: "PK", name: "Pakistan", timezone: "Asia/Karachi", offset_secs: 18_000 },
    CountryRecord { code: "BD", name: "Bangladesh", timezone: "Asia/Dhaka", offset_secs: 21_600 },
    CountryRecord { code: "IR", name: "Iran", timezone: "Asia/Tehran", offset_secs: 12_600 },
    CountryRecord { code: "SA", name: "Saudi Arabia", timezone: "Asia/Riyadh", offset_secs: 10_800 },
    CountryRecord { code: "NZ", name: "New Zealand", timezone: "Pacific/Auckland", offset_secs: 43_200 },
    CountryRecord { code: "MX", name: "Mexico", timezone: "America/Mexico_City", offset_secs: -21_600 },
    CountryRecord { code: "AR", name: "Argentina", timezone: "America/Argentina/Buenos_Aires", offset_secs: -10_800 },
    CountryRecord { code: "CL", name: "Chile", timezone: "America/Santiago", offset_secs: -14_400 },
    CountryRecord { code: "CO", name: "Colombia", timezone: "America/Bogota", offset_secs: -18_000 },
    CountryRecord { code: "PE", name: "Peru", timezone: "America/Lima", offset_secs: -18_000 },
    CountryRecord { code: "ZA", name: "South Africa", timezone: "Africa/Johannesburg", offset_secs: 7_200 },
    CountryRecord { code: "NG", name: "Nigeria", timezone: "Africa/Lagos", offset_secs: 3_600 },
    CountryRecord { code: "EG", name: "Egypt", timezone: "Africa/Cairo", offset_secs: 7_200 },
    CountryRecord { code: "KE", name: "Kenya", timezone: "Africa/Nairobi", offset_secs: 10_800 },
    CountryRecord { code: "GR", name: "Greece", timezone: "Europe/Athens", offset_secs: 7_200 },
    CountryRecord { code: "RO", name: "Romania", timezone: "Europe/Bucharest", offset_secs: 7_200 },
    CountryRecord { code: "HU", name: "Hungary", timezone: "Europe/Budapest", offset_secs: 3_600 },
    CountryRecord { code: "BG", name: "Bulgaria", timezone: "Europe/Sofia", offset_secs: 7_200 },
    CountryRecord { code: "RS", name: "Serbia", timezone: "Europe/Belgrade", offset_secs: 3_600 },
    CountryRecord { code: "HR", name: "Croatia", timezone: "Europe/Zagreb", offset_secs: 3_600 },
    CountryRecord { code: "SK", name: "Slovakia", timezone: "Europe/Bratislava", offset_secs: 3_600 },
    CountryRecord { code: "SI", name: "Slovenia", timezone: "Europe/Ljubljana", offset_secs: 3_600 },
    CountryRecord { code: "EE", name: "Estonia", timezone: "Europe/Tallinn", offset_secs: 7_200 },
    CountryRecord { code: "LV", name: "Latvia", timezone: "Europe/Riga", offset_secs: 7_200 },
    CountryRecord { code: "LT", name: "Lithuania", timezone: "Europe/Vilnius", offset_secs: 7_200 },
];

pub static PLACES: &[PlaceRecord] = &[
    // United States
    PlaceRecord { name: "new york", display: "New York", country: "US", population: 8_400_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "san francisco", display: "San Francisco", country: "US", population: 870_000, timezone: "America/Los_Angeles", offset_secs: -28_800 },
    PlaceRecord { name: "los angeles", display: "Los Angeles", country: "US", population: 3_900_000, timezone: "America/Los_Angeles", offset_secs: -28_800 },
    PlaceRecord { name: "seattle", display: "Seattle", country: "US", population: 740_000, timezone: "America/Los_Angeles", offset_secs: -28_800 },
    PlaceRecord { name: "portland", display: "Portland", country: "US", population: 650_000, timezone: "America/Los_Angeles", offset_secs: -28_800 },
    PlaceRecord { name: "san diego", display: "San Diego", country: "US", population: 1_380_000, timezone: "America/Los_Angeles", offset_secs: -28_800 },
    PlaceRecord { name: "san jose", display: "San Jose", country: "US", population: 1_000_000, timezone: "America/Los_Angeles", offset_secs: -28_800 },
    PlaceRecord { name: "oakland", display: "Oakland", country: "US", population: 440_000, timezone: "America/Los_Angeles", offset_secs: -28_800 },
    PlaceRecord { name: "berkeley", display: "Berkeley", country: "US", population: 124_000, timezone: "America/Los_Angeles", offset_secs: -28_800 },
    PlaceRecord { name: "palo alto", display: "Palo Alto", country: "US", population: 68_000, timezone: "America/Los_Angeles", offset_secs: -28_800 },
    PlaceRecord { name: "mountain view", display: "Mountain View", country: "US", population: 82_000, timezone: "America/Los_Angeles", offset_secs: -28_800 },
    PlaceRecord { name: "cupertino", display: "Cupertino", country: "US", population: 60_000, timezone: "America/Los_Angeles", offset_secs: -28_800 },
    PlaceRecord { name: "redmond", display: "Redmond", country: "US", population: 73_000, timezone: "America/Los_Angeles", offset_secs: -28_800 },
    PlaceRecord { name: "austin", display: "Austin", country: "US", population: 960_000, timezone: "America/Chicago", offset_secs: -21_600 },
    PlaceRecord { name: "dallas", display: "Dallas", country: "US", population: 1_300_000, timezone: "America/Chicago", offset_secs: -21_600 },
    PlaceRecord { name: "houston", display: "Houston", country: "US", population: 2_300_000, timezone: "America/Chicago", offset_secs: -21_600 },
    PlaceRecord { name: "chicago", display: "Chicago", country: "US", population: 2_700_000, timezone: "America/Chicago", offset_secs: -21_600 },
    PlaceRecord { name: "minneapolis", display: "Minneapolis", country: "US", population: 430_000, timezone: "America/Chicago", offset_secs: -21_600 },
    PlaceRecord { name: "nashville", display: "Nashville", country: "US", population: 690_000, timezone: "America/Chicago", offset_secs: -21_600 },
    PlaceRecord { name: "denver", display: "Denver", country: "US", population: 715_000, timezone: "America/Denver", offset_secs: -25_200 },
    PlaceRecord { name: "boulder", display: "Boulder", country: "US", population: 108_000, timezone: "America/Denver", offset_secs: -25_200 },
    PlaceRecord { name: "salt lake", display: "Salt Lake City", country: "US", population: 200_000, timezone: "America/Denver", offset_secs: -25_200 },
    PlaceRecord { name: "phoenix", display: "Phoenix", country: "US", population: 1_600_000, timezone: "America/Phoenix", offset_secs: -25_200 },
    PlaceRecord { name: "boston", display: "Boston", country: "US", population: 650_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "cambridge", display: "Cambridge", country: "US", population: 118_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "washington", display: "Washington", country: "US", population: 690_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "philadelphia", display: "Philadelphia", country: "US", population: 1_600_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "atlanta", display: "Atlanta", country: "US", population: 500_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "miami", display: "Miami", country: "US", population: 440_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "pittsburgh", display: "Pittsburgh", country: "US", population: 300_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "raleigh", display: "Raleigh", country: "US", population: 470_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "detroit", display: "Detroit", country: "US", population: 640_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "brooklyn", display: "Brooklyn", country: "US", population: 2_600_000, timezone: "America/New_York", offset_secs: -18_000 },
    // US states
    PlaceRecord { name: "california", display: "California", country: "US", population: 39_000_000, timezone: "America/Los_Angeles", offset_secs: -28_800 },
    PlaceRecord { name: "texas", display: "Texas", country: "US", population: 30_000_000, timezone: "America/Chicago", offset_secs: -21_600 },
    PlaceRecord { name: "florida", display: "Florida", country: "US", population: 22_000_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "pennsylvania", display: "Pennsylvania", country: "US", population: 13_000_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "illinois", display: "Illinois", country: "US", population: 12_600_000, timezone: "America/Chicago", offset_secs: -21_600 },
    PlaceRecord { name: "ohio", display: "Ohio", country: "US", population: 11_800_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "georgia", display: "Georgia", country: "US", population: 10_900_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "north carolina", display: "North Carolina", country: "US", population: 10_700_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "michigan", display: "Michigan", country: "US", population: 10_000_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "new jersey", display: "New Jersey", country: "US", population: 9_300_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "virginia", display: "Virginia", country: "US", population: 8_600_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "massachusetts", display: "Massachusetts", country: "US", population: 7_000_000, timezone: "America/New_York", offset_secs: -18_000 },
    PlaceRecord { name: "arizona", display: "Arizona", country: "US", population: 7_300_000, timezone: "America/Phoenix", offset_secs: -25_200 },
    PlaceRecord { name: "colorado", display: "Colorado", country: "US", population: 5_800_000, timezone: "America/Denver", offset_secs: -25_200 },
    PlaceRecord { name: "minnesota", display: "Minnesota", country: "US", population: 5_700_000, timezone: "America/Chicago", offset_secs: -21_600 },
    PlaceRecord { name: "oregon", display: "Oregon", country: "US", population: 4_200_000, timezone: "America/Los_Angeles", offset_secs: -28_800 },
    PlaceRecord { name: "utah", display: "Utah", country: "US", population: 3_400_000, timezone: "America/Denver", offset_secs: -25_200 },
    // Canada
    PlaceRecord { name: "toronto", display: "Toronto", country: "CA", population: 2_930_000, timezone: "America/Toronto", offset_secs: -18_000 },
    PlaceRecord { name: "vancouver", display: "Vancouver", country: "CA", population: 675_000, timezone: "America/Vancouver", offset_secs: -28_800 },
    PlaceRecord { name: "montreal", display: "Montreal", country: "CA", population: 1_760_000, timezone: "America/Toronto", offset_secs: -18_000 },
    PlaceRecord { name: "ottawa", display: "Ottawa", country: "CA", population: 1_000_000, timezone: "America/Toronto", offset_secs: -18_000 },
    PlaceRecord { name: "calgary", display: "Calgary", country: "CA", population: 1_300_000, timezone: "America/Edmonton", offset_secs: -25_200 },
    PlaceRecord { name: "waterloo", display: "Waterloo", country: "CA", population: 121_000, timezone: "America/Toronto", offset_secs: -18_000 },
    PlaceRecord { name: "ontario", display: "Ontario", country: "CA", population: 14_700_000, timezone: "America/Toronto", offset_secs: -18_000 },
    PlaceRecord { name: "quebec", display: "Quebec", country: "CA", population: 8_500_000, timezone: "America/Toronto", offset_secs: -18_000 },
    PlaceRecord { name: "british columbia", display: "British Columbia", country: "CA", population: 5_000_000, timezone: "America/Vancouver", offset_secs: -28_800 },
    PlaceRecord { name: "alberta", display: "Alberta", country: "CA", population: 4_400_000, timezone: "America/Edmonton", offset_secs: -25_200 },
    // United Kingdom
    PlaceRecord { name: "london", display: "London", country: "GB", population: 8_900_000, timezone: "Europe/London", offset_secs: 0 },
    PlaceRecord { name: "manchester", display: "Manchester", country: "GB", population: 550_000, timezone: "Europe/London", offset_secs: 0 },
    PlaceRecord { name: "birmingham", display: "Birmingham", country: "GB", population: 1_140_000, timezone: "Europe/London", offset_secs: 0 },
    PlaceRecord { name: "edinburgh", display: "Edinburgh", country: "GB", population: 530_000, timezone: "Europe/London", offset_secs: 0 },
    PlaceRecord { name: "glasgow", display: "Glasgow", country: "GB", population: 635_000, timezone: "Europe/London", offset_secs: 0 },
    PlaceRecord { name: "bristol", display: "Bristol", country: "GB", population: 465_000, timezone: "Europe/London", offset_secs: 0 },
    PlaceRecord { name: "leeds", display: "Leeds", country: "GB", population: 790_000, timezone: "Europe/London", offset_secs: 0 },
    PlaceRecord { name: "oxford", display: "Oxford", country: "GB", population: 152_000, timezone: "Europe/London", offset_secs: 0 },
    PlaceRecord { name: "cambridge", display: "Cambridge", country: "GB", population: 145_000, timezone: "Europe/London", offset_secs: 0 },
    PlaceRecord { name: "england", display: "England", country: "GB", population: 56_000_000, timezone: "Europe/London", offset_secs: 0 },
    PlaceRecord { name: "scotland", display: "Scotland", country: "GB", population: 5_450_000, timezone: "Europe/London", offset_secs: 0 },
    PlaceRecord { name: "wales", display: "Wales", country: "GB", population: 3_100_000, timezone: "Europe/London", offset_secs: 0 },
    // Germany
    PlaceRecord { name: "berlin", display: "Berlin", country: "DE", population: 3_600_000, timezone: "Europe/Berlin", offset_secs: 3_600 },
    PlaceRecord { name: "munich", display: "Munich", country: "DE", population: 1_480_000, timezone: "Europe/Berlin", offset_secs: 3_600 },
    PlaceRecord { name: "hamburg", display: "Hamburg", country: "DE", population: 1_840_000, timezone: "Europe/Berlin", offset_secs: 3_600 },
    PlaceRecord { name: "cologne", display: "Cologne", country: "DE", population: 1_080_000, timezone: "Europe/Berlin", offset_secs: 3_600 },
    PlaceRecord { name: "frankfurt", display: "Frankfurt", country: "DE", population: 750_000, timezone: "Europe/Berlin", offset_secs: 3_600 },
    PlaceRecord { name: "stuttgart", display: "Stuttgart", country: "DE", population: 630_000, timezone: "Europe/Berlin", offset_secs: 3_600 },
    PlaceRecord { name: "dresden", display: "Dresden", country: "DE", population: 560_000, timezone: "Europe/Berlin", offset_secs: 3_600 },
    PlaceRecord { name: "bavaria", display: "Bavaria", country: "DE", population: 13_100_000, timezone: "Europe/Berlin", offset_secs: 3_600 },
    // Rest of Europe
    PlaceRecord { name: "paris", display: "Paris", country: "FR", population: 2_100_000, timezone: "Europe/Paris", offset_secs: 3_600 },
    PlaceRecord { name: "lyon", display: "Lyon", country: "FR", population: 520_000, timezone: "Europe/Paris", offset_secs: 3_600 },
    PlaceRecord { name: "toulouse", display: "Toulouse", country: "FR", population: 490_000, timezone: "Europe/Paris", offset_secs: 3_600 },
    PlaceRecord { name: "bordeaux", display: "Bordeaux", country: "FR", population: 260_000, timezone: "Europe/Paris", offset_secs: 3_600 },
    PlaceRecord { name: "amsterdam", display: "Amsterdam", country: "NL", population: 870_000, timezone: "Europe/Amsterdam", offset_secs: 3_600 },
    PlaceRecord { name: "rotterdam", display: "Rotterdam", country: "NL", population: 650_000, timezone: "Europe/Amsterdam", offset_secs: 3_600 },
    PlaceRecord { name: "utrecht", display: "Utrecht", country: "NL", population: 360_000, timezone: "Europe/Amsterdam", offset_secs: 3_600 },
    PlaceRecord { name: "eindhoven", display: "Eindhoven", country: "NL", population: 240_000, timezone: "Europe/Amsterdam", offset_secs: 3_600 },
    PlaceRecord { name: "the hague", display: "The Hague", country: "NL", population: 545_000, timezone: "Europe/Amsterdam", offset_secs: 3_600 },
    PlaceRecord { name: "stockholm", display: "Stockholm", country: "SE", population: 975_000, timezone: "Europe/Stockholm", offset_secs: 3_600 },
    PlaceRecord { name: "gothenburg", display: "Gothenburg", country: "SE", population: 580_000, timezone: "Europe/Stockholm", offset_secs: 3_600 },
    PlaceRecord { name: "oslo", display: "Oslo", country: "NO", population: 700_000, timezone: "Europe/Oslo", offset_secs: 3_600 },
    PlaceRecord { name: "copenhagen", display: "Copenhagen", country: "DK", population: 640_000, timezone: "Europe/Copenhagen", offset_secs: 3_600 },
    PlaceRecord { name: "helsinki", display: "Helsinki", country: "FI", population: 655_000, timezone: "Europe/Helsinki", offset_secs: 7_200 },
    PlaceRecord { name: "warsaw", display: "Warsaw", country: "PL", population: 1_790_000, timezone: "Europe/Warsaw", offset_secs: 3_600 },
    PlaceRecord { name: "krakow", display: "Krakow", country: "PL", population: 780_000, timezone: "Europe/Warsaw", offset_secs: 3_600 },
    PlaceRecord { name: "wroclaw", display: "Wroclaw", country: "PL", population: 640_000, timezone: "Europe/Warsaw", offset_secs: 3_600 },
    PlaceRecord { name: "prague", display: "Prague", country: "CZ", population: 1_300_000, timezone: "Europe/Prague", offset_secs: 3_600 },
    PlaceRecord { name: "vienna", display: "Vienna", country: "AT", population: 1_900_000, timezone: "Europe/Vienna", offset_secs: 3_600 },
    PlaceRecord { name: "zurich", display: "Zurich", country: "CH", population: 420_000, timezone: "Europe/Zurich", offset_secs: 3_600 },
    PlaceRecord { name: "geneva", display: "Geneva", country: "CH", population: 200_000, timezone: "Europe/Zurich", offset_secs: 3_600 },
    PlaceRecord { name: "bern", display: "Bern", country: "CH", population: 133_000, timezone: "Europe/Zurich", offset_secs: 3_600 },
    PlaceRecord { name: "brussels", display: "Brussels", country: "BE", population: 1_200_000, timezone: "Europe/Brussels", offset_secs: 3_600 },
    PlaceRecord { name: "dublin", display: "Dublin", country: "IE", population: 555_000, timezone: "Europe/Dublin", offset_secs: 0 },
    PlaceRecord { name: "madrid", display: "Madrid", country: "ES", population: 3_200_000, timezone: "Europe/Madrid", offset_secs: 3_600 },
    PlaceRecord { name: "barcelona", display: "Barcelona", country: "ES", population: 1_620_000, timezone: "Europe/Madrid", offset_secs: 3_600 },
    PlaceRecord { name: "valencia", display: "Valencia", country: "ES", population: 790_000, timezone: "Europe/Madrid", offset_secs: 3_600 },
    PlaceRecord { name: "lisbon", display: "Lisbon", country: "PT", population: 545_000, timezone: "Europe/Lisbon", offset_secs: 0 },
    PlaceRecord { name: "porto", display: "Porto", country: "PT", population: 230_000, timezone: "Europe/Lisbon", offset_secs: 0 },
    PlaceRecord { name: "milan", display: "Milan", country: "IT", population: 1_350_000, timezone: "Europe/Rome", offset_secs: 3_600 },
    PlaceRecord { name: "rome", display: "Rome", country: "IT", population: 2_800_000, timezone: "Europe/Rome", offset_secs: 3_600 },
    PlaceRecord { name: "turin", display: "Turin", country: "IT", population: 850_000, timezone: "Europe/Rome", offset_secs: 3_600 },
    PlaceRecord { name: "athens", display: "Athens", country: "GR", population: 660_000, timezone: "Europe/Athens", offset_secs: 7_200 },
    PlaceRecord { name: "bucharest", display: "Bucharest", country: "RO", population: 1_800_000, timezone: "Europe/Bucharest", offset_secs: 7_200 },
    PlaceRecord { name: "budapest", display: "Budapest", country: "HU", population: 1_750_000, timezone: "Europe/Budapest", offset_secs: 3_600 },
    PlaceRecord { name: "sofia", display: "Sofia", country: "BG", population: 1_240_000, timezone: "Europe/Sofia", offset_secs: 7_200 },
    PlaceRecord { name: "belgrade", display: "Belgrade", country: "RS", population: 1_370_000, timezone: "Europe/Belgrade", offset_secs: 3_600 },
    PlaceRecord { name: "zagreb", display: "Zagreb", country: "HR", population: 800_000, timezone: "Europe/Zagreb", offset_secs: 3_600 },
    PlaceRecord { name: "tallinn", display: "Tallinn", country: "EE", population: 440_000, timezone: "Europe/Tallinn", offset_secs: 7_200 },
    PlaceRecord { name: "riga", display: "Riga", country: "LV", population: 615_000, timezone: "Europe/Riga", offset_secs: 7_200 },
    PlaceRecord { name: "vilnius", display: "Vilnius", country: "LT", population: 580_000, timezone: "Europe/Vilnius", offset_secs: 7_200 },
    PlaceRecord { name: "moscow", display: "Moscow", country: "RU", population: 12_500_000, timezone: "Europe/Moscow", offset_secs: 10_800 },
    PlaceRecord { name: "saint petersburg", display: "Saint Petersburg", country: "RU", population: 5_380_000, timezone: "Europe/Moscow", offset_secs: 10_800 },
    PlaceRecord { name: "kyiv", display: "Kyiv", country: "UA", population: 2_950_000, timezone: "Europe/Kyiv", offset_secs: 7_200 },
    PlaceRecord { name: "lviv", display: "Lviv", country: "UA", population: 720_000, timezone: "Europe/Kyiv", offset_secs: 7_200 },
    PlaceRecord { name: "istanbul", display: "Istanbul", country: "TR", population: 15_500_000, timezone: "Europe/Istanbul", offset_secs: 10_800 },
    PlaceRecord { name: "ankara", display: "Ankara", country: "TR", population: 5_700_000, timezone: "Europe/Istanbul", offset_secs: 10_800 },
    // Middle East & Africa
    PlaceRecord { name: "tel aviv", display: "Tel Aviv", country: "IL", population: 460_000, timezone: "Asia/Jerusalem", offset_secs: 7_200 },
    PlaceRecord { name: "jerusalem", display: "Jerusalem", country: "IL", population: 940_000, timezone: "Asia/Jerusalem", offset_secs: 7_200 },
    PlaceRecord { name: "dubai", display: "Dubai", country: "AE", population: 3_300_000, timezone: "Asia/Dubai", offset_secs: 14_400 },
    PlaceRecord { name: "cairo", display: "Cairo", country: "EG", population: 9_500_000, timezone: "Africa/Cairo", offset_secs: 7_200 },
    PlaceRecord { name: "lagos", display: "Lagos", country: "NG", population: 14_800_000, timezone: "Africa/Lagos", offset_secs: 3_600 },
    PlaceRecord { name: "nairobi", display: "Nairobi", country: "KE", population: 4_400_000, timezone: "Africa/Nairobi", offset_secs: 10_800 },
    PlaceRecord { name: "cape town", display: "Cape Town", country: "ZA", population: 4_600_000, timezone: "Africa/Johannesburg", offset_secs: 7_200 },
    PlaceRecord { name: "johannesburg", display: "Johannesburg", country: "ZA", population: 5_600_000, timezone: "Africa/Johannesburg", offset_secs: 7_200 },
    // Asia
    PlaceRecord { name: "bangalore", display: "Bangalore", country: "IN", population: 12_300_000, timezone: "Asia/Kolkata", offset_secs: 19_800 },
    PlaceRecord { name: "mumbai", display: "Mumbai", country: "IN", population: 20_400_000, timezone: "Asia/Kolkata", offset_secs: 19_800 },
    PlaceRecord { name: "delhi", display: "Delhi", country: "IN", population: 31_200_000, timezone: "Asia/Kolkata", offset_secs: 19_800 },
    PlaceRecord { name: "hyderabad", display: "Hyderabad", country: "IN", population: 10_000_000, timezone: "Asia/Kolkata", offset_secs: 19_800 },
    PlaceRecord { name: "chennai", display: "Chennai", country: "IN", population: 11_200_000, timezone: "Asia/Kolkata", offset_secs: 19_800 },
    PlaceRecord { name: "pune", display: "Pune", country: "IN", population: 6_600_000, timezone: "Asia/Kolkata", offset_secs: 19_800 },
    PlaceRecord { name: "kolkata", display: "Kolkata", country: "IN", population: 14_800_000, timezone: "Asia/Kolkata", offset_secs: 19_800 },
    PlaceRecord { name: "gurgaon", display: "Gurgaon", country: "IN", population: 1_100_000, timezone: "Asia/Kolkata", offset_secs: 19_800 },
    PlaceRecord { name: "beijing", display: "Beijing", country: "CN", population: 21_500_000, timezone: "Asia/Shanghai", offset_secs: 28_800 },
    PlaceRecord { name: "shanghai", display: "Shanghai", country: "CN", population: 26_300_000, timezone: "Asia/Shanghai", offset_secs: 28_800 },
    PlaceRecord { name: "shenzhen", display: "Shenzhen", country: "CN", population: 12_500_000, timezone: "Asia/Shanghai", offset_secs: 28_800 },
    PlaceRecord { name: "hangzhou", display: "Hangzhou", country: "CN", population: 10_300_000, timezone: "Asia/Shanghai", offset_secs: 28_800 },
    PlaceRecord { name: "guangzhou", display: "Guangzhou", country: "CN", population: 15_300_000, timezone: "Asia/Shanghai", offset_secs: 28_800 },
    PlaceRecord { name: "chengdu", display: "Chengdu", country: "CN", population: 16_300_000, timezone: "Asia/Shanghai", offset_secs: 28_800 },
    PlaceRecord { name: "tokyo", display: "Tokyo", country: "JP", population: 13_900_000, timezone: "Asia/Tokyo", offset_secs: 32_400 },
    PlaceRecord { name: "osaka", display: "Osaka", country: "JP", population: 2_750_000, timezone: "Asia/Tokyo", offset_secs: 32_400 },
    PlaceRecord { name: "kyoto", display: "Kyoto", country: "JP", population: 1_460_000, timezone: "Asia/Tokyo", offset_secs: 32_400 },
    PlaceRecord { name: "seoul", display: "Seoul", country: "KR", population: 9_700_000, timezone: "Asia/Seoul", offset_secs: 32_400 },
    PlaceRecord { name: "busan", display: "Busan", country: "KR", population: 3_400_000, timezone: "Asia/Seoul", offset_secs: 32_400 },
    PlaceRecord { name: "taipei", display: "Taipei", country: "TW", population: 2_600_000, timezone: "Asia/Taipei", offset_secs: 28_800 },
    PlaceRecord { name: "jakarta", display: "Jakarta", country: "ID", population: 10_500_000, timezone: "Asia/Jakarta", offset_secs: 25_200 },
    PlaceRecord { name: "bangkok", display: "Bangkok", country: "TH", population: 10_500_000, timezone: "Asia/Bangkok", offset_secs: 25_200 },
    PlaceRecord { name: "ho chi minh", display: "Ho Chi Minh City", country: "VN", population: 9_000_000, timezone: "Asia/Ho_Chi_Minh", offset_secs: 25_200 },
    PlaceRecord { name: "hanoi", display: "Hanoi", country: "VN", population: 8_000_000, timezone: "Asia/Ho_Chi_Minh", offset_secs: 25_200 },
    PlaceRecord { name: "manila", display: "Manila", country: "PH", population: 1_780_000, timezone: "Asia/Manila", offset_secs: 28_800 },
    PlaceRecord { name: "kuala lumpur", display: "Kuala Lumpur", country: "MY", population: 1_800_000, timezone: "Asia/Kuala_Lumpur", offset_secs: 28_800 },
    PlaceRecord { name: "karachi", display: "Karachi", country: "PK", population: 16_000_000, timezone: "Asia/Karachi", offset_secs: 18_000 },
    PlaceRecord { name: "lahore", display: "Lahore", country: "PK", population: 13_000_000, timezone: "Asia/Karachi", offset_secs: 18_000 },
    PlaceRecord { name: "islamabad", display: "Islamabad", country: "PK", population: 1_100_000, timezone: "Asia/Karachi", offset_secs: 18_000 },
    PlaceRecord { name: "dhaka", display: "Dhaka", country: "BD", population: 8_900_000, timezone: "Asia/Dhaka", offset_secs: 21_600 },
    // Oceania
    PlaceRecord { name: "sydney", display: "Sydney", country: "AU", population: 5_300_000, timezone: "Australia/Sydney", offset_secs: 36_000 },
    PlaceRecord { name: "melbourne", display: "Melbourne", country: "AU", population: 5_000_000, timezone: "Australia/Melbourne", offset_secs: 36_000 },
    PlaceRecord { name: "brisbane", display: "Brisbane", country: "AU", population: 2_560_000, timezone: "Australia/Brisbane", offset_secs: 36_000 },
    PlaceRecord { name: "perth", display: "Perth", country: "AU", population: 2_100_000, timezone: "Australia/Perth", offset_secs: 28_800 },
    PlaceRecord { name: "adelaide", display: "Adelaide", country: "AU", population: 1_360_000, timezone: "Australia/Adelaide", offset_secs: 34_200 },
    PlaceRecord { name: "canberra", display: "Canberra", country: "AU", population: 430_000, timezone: "Australia/Sydney", offset_secs: 36_000 },
    PlaceRecord { name: "auckland", display: "Auckland", country: "NZ", population: 1_650_000, timezone: "Pacific/Auckland", offset_secs: 43_200 },
    PlaceRecord { name: "wellington", display: "Wellington", country: "NZ", population: 215_000, timezone: "Pacific/Auckland", offset_secs: 43_200 },
    // Latin America
    PlaceRecord { name: "sao paulo", display: "Sao Paulo", country: "BR", population: 12_300_000, timezone: "America/Sao_Paulo", offset_secs: -10_800 },
    PlaceRecord { name: "rio de janeiro", display: "Rio de Janeiro", country: "BR", population: 6_700_000, timezone: "America/Sao_Paulo", offset_secs: -10_800 },
    PlaceRecord { name: "belo horizonte", display: "Belo Horizonte", country: "BR", population: 2_500_000, timezone: "America/Sao_Paulo", offset_secs: -10_800 },
    PlaceRecord { name: "curitiba", display: "Curitiba", country: "BR", population: 1_960_000, timezone: "America/Sao_Paulo", offset_secs: -10_800 },
    PlaceRecord { name: "porto alegre", display: "Porto Alegre", country: "BR", population: 1_480_000, timezone: "America/Sao_Paulo", offset_secs: -10_800 },
    PlaceRecord { name: "florianopolis", display: "Florianopolis", country: "BR", population: 510_000, timezone: "America/Sao_Paulo", offset_secs: -10_800 },
    PlaceRecord { name: "buenos aires", display: "Buenos Aires", country: "AR", population: 3_100_000, timezone: "America/Argentina/Buenos_Aires", offset_secs: -10_800 },
    PlaceRecord { name: "santiago", display: "Santiago", country: "CL", population: 6_200_000, timezone: "America/Santiago", offset_secs: -14_400 },
    PlaceRecord { name: "bogota", display: "Bogota", country: "CO", population: 7_400_000, timezone: "America/Bogota", offset_secs: -18_000 },
    PlaceRecord { name: "medellin", display: "Medellin", country: "CO", population: 2_500_000, timezone: "America/Bogota", offset_secs: -18_000 },
    PlaceRecord { name: "lima", display: "Lima", country: "PE", population: 9_700_000, timezone: "America/Lima", offset_secs: -18_000 },
    PlaceRecord { name: "guadalajara", display: "Guadalajara", country: "MX", population: 1_400_000, timezone: "America/Mexico_City", offset_secs: -21_600 },
    PlaceRecord { name: "monterrey", display: "Monterrey", country: "MX", population: 1_100_000, timezone: "America/Monterrey", offset_secs: -21_600 },
];

/// Find a country by its ISO 3166-1 alpha-2 code.
#[must_use]
pub fn country_by_code(code: &str) -> Option<&'static CountryRecord> {
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Find a country by its full name (pre-normalized, lowercase).
#[must_use]
pub fn country_by_name(name: &str) -> Option<&'static CountryRecord> {
    COUNTRIES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Find all places with the given normalized name.
pub fn places_by_name(name: &str) -> impl Iterator<Item = &'static PlaceRecord> {
    PLACES.iter().filter(move |p| p.name == name)
}
