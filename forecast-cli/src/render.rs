//! Coloured terminal output for forecasts, menus and status lines.
//!
//! Everything writes into a caller-supplied `Write`, so the CLI passes a
//! locked stdout and tests pass a `Vec<u8>`.

use std::io::{self, Write};

use forecast_core::{
    ErrorKind, Forecast, ForecastError, ForecastKind, ForecastRecord, WeatherTranslationTable,
};

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";
const WHITE: &str = "\x1b[37m";

/// Block colours for consecutive today records.
const TODAY_COLORS: [&str; 3] = [CYAN, YELLOW, GREEN];

const MISSING: &str = "-";

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    let border = "═".repeat(60);
    writeln!(out)?;
    writeln!(out, "{CYAN}╔{border}╗")?;
    writeln!(out, "║{YELLOW}{:^60}{CYAN}║", "🌞 SELAMAT DATANG DI 🌞")?;
    writeln!(
        out,
        "║{YELLOW}{:^60}{CYAN}║",
        format!("APLIKASI PREDIKSI CUACA v{}", env!("CARGO_PKG_VERSION"))
    )?;
    writeln!(out, "╚{border}╝{RESET}")?;
    writeln!(out)?;
    writeln!(out, "{YELLOW}Fitur:{RESET}")?;
    writeln!(out, "📍 Prediksi cuaca untuk kota di seluruh dunia")?;
    writeln!(out, "🌡️ Informasi suhu dan kelembaban udara")?;
    writeln!(out, "💨 Kecepatan angin dalam m/s")?;
    writeln!(out, "🌤️ Kondisi cuaca dengan icon")?;
    writeln!(out, "📅 Prediksi harian, mingguan, dan bulanan")?;
    writeln!(out)?;
    writeln!(out, "{CYAN}Dibuat dengan ❤️  menggunakan Rust & wttr.in{RESET}")
}

pub fn menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{CYAN}Pilih jenis prediksi:{RESET}")?;
    writeln!(out, "1. {GREEN}Hari ini{RESET} (3 periode waktu)")?;
    writeln!(out, "2. {YELLOW}Mingguan{RESET} (7 hari ke depan)")?;
    writeln!(out, "3. {MAGENTA}Bulanan{RESET} (4 minggu ke depan)")?;
    writeln!(out, "q. {RED}Keluar{RESET}")
}

pub fn invalid_choice(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{RED}❌ Pilihan tidak valid. Silakan coba lagi.{RESET}")
}

pub fn empty_city(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{RED}❌ Nama kota tidak boleh kosong.{RESET}")
}

pub fn fetching(out: &mut impl Write, city: &str) -> io::Result<()> {
    writeln!(out, "\n{CYAN}🌤️  Mengambil data cuaca untuk {city}...{RESET}")
}

pub fn goodbye(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "\n{YELLOW}Terima kasih telah menggunakan Aplikasi Prediksi Cuaca!{RESET} 👋\n"
    )
}

pub fn interrupted(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n\n{YELLOW}Program dihentikan oleh user.{RESET} 👋\n")
}

pub fn error(out: &mut impl Write, err: &ForecastError) -> io::Result<()> {
    let headline = match err.kind() {
        ErrorKind::FetchFailed => "Gagal mengambil data",
        ErrorKind::MissingRequiredSection => "Data cuaca tidak lengkap",
        ErrorKind::MalformedField => "Data cuaca tidak valid",
    };

    writeln!(out, "{RED}❌ Error: {headline}: {}{RESET}", err.detail())?;
    writeln!(
        out,
        "{YELLOW}💡 Tips: Pastikan nama kota benar dan koneksi internet stabil.{RESET}"
    )
}

/// Success line followed by the report for the forecast's kind.
pub fn forecast(
    out: &mut impl Write,
    forecast: &Forecast,
    table: &WeatherTranslationTable,
) -> io::Result<()> {
    writeln!(out, "{GREEN}✅ Berhasil mengambil data cuaca!{RESET}")?;

    if forecast.records.is_empty() {
        return writeln!(out, "{YELLOW}Tidak ada data prakiraan yang tersedia.{RESET}");
    }

    match forecast.kind {
        ForecastKind::Today => today(out, &forecast.records, table),
        ForecastKind::Weekly => weekly(out, &forecast.records, table),
        ForecastKind::Monthly => monthly(out, &forecast.records, table),
    }
}

fn today(
    out: &mut impl Write,
    records: &[ForecastRecord],
    table: &WeatherTranslationTable,
) -> io::Result<()> {
    let rule = "=".repeat(50);

    for (i, record) in records.iter().enumerate() {
        let c = TODAY_COLORS[i % TODAY_COLORS.len()];
        let weather = table.lookup(&record.weather_condition);

        writeln!(out, "\n{c}{rule}{RESET}")?;
        writeln!(out, "{c}Waktu{RESET}: {WHITE}{}", record.timestamp.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(out, "{c}Kota{RESET}: {WHITE}{}", record.city)?;
        writeln!(out, "{c}Cuaca{RESET}: {WHITE}{weather}")?;
        writeln!(out, "{c}Suhu{RESET}: {WHITE}{}°C", record.temperature)?;
        writeln!(out, "{c}Terasa seperti{RESET}: {WHITE}{}°C", text_or_missing(&record.feels_like))?;
        writeln!(out, "{c}Kelembaban{RESET}: {WHITE}{}%", text_or_missing(&record.humidity))?;
        writeln!(out, "{c}Kecepatan Angin{RESET}: {WHITE}{} m/s", wind(record))?;
        writeln!(out, "{c}{rule}{RESET}")?;
    }

    Ok(())
}

fn weekly(
    out: &mut impl Write,
    records: &[ForecastRecord],
    table: &WeatherTranslationTable,
) -> io::Result<()> {
    writeln!(out, "\n{CYAN}📅 PREDIKSI CUACA MINGGUAN{RESET}")?;
    writeln!(out, "{CYAN}{}{RESET}", "=".repeat(60))?;

    for record in records {
        let weather = table.lookup(&record.weather_condition);

        writeln!(out, "\n{YELLOW}Tanggal{RESET}: {}", record.timestamp.format("%A, %d %B %Y"))?;
        writeln!(out, "{YELLOW}Kota{RESET}: {}", record.city)?;
        writeln!(out, "{YELLOW}Cuaca{RESET}: {weather}")?;
        writeln!(
            out,
            "{YELLOW}Suhu{RESET}: {}°C (Min: {}°C, Max: {}°C)",
            record.temperature,
            temp_or_missing(record.min_temp),
            temp_or_missing(record.max_temp),
        )?;
        writeln!(out, "{YELLOW}Kelembaban{RESET}: {}%", text_or_missing(&record.humidity))?;
        writeln!(out, "{YELLOW}Kecepatan Angin{RESET}: {} m/s", wind(record))?;
        writeln!(out, "{CYAN}{}{RESET}", "-".repeat(40))?;
    }

    Ok(())
}

fn monthly(
    out: &mut impl Write,
    records: &[ForecastRecord],
    table: &WeatherTranslationTable,
) -> io::Result<()> {
    writeln!(out, "\n{MAGENTA}📅 PREDIKSI CUACA BULANAN (Per Minggu){RESET}")?;
    writeln!(out, "{MAGENTA}{}{RESET}", "=".repeat(60))?;

    for (n, record) in records.iter().enumerate() {
        let weather = table.lookup(&record.weather_condition);
        let end = record
            .end_timestamp
            .map(|end| end.format("%d %B %Y").to_string())
            .unwrap_or_else(|| MISSING.to_string());

        writeln!(out, "\n{YELLOW}Minggu {}{RESET}", n + 1)?;
        writeln!(out, "Periode: {} - {end}", record.timestamp.format("%d %B"))?;
        writeln!(out, "Kota: {}", record.city)?;
        writeln!(out, "Cuaca: {weather}")?;
        writeln!(out, "Rata-rata Suhu: {}°C", record.temperature)?;
        writeln!(
            out,
            "Range Suhu: {}°C - {}°C",
            temp_or_missing(record.min_temp),
            temp_or_missing(record.max_temp),
        )?;
        writeln!(out, "{MAGENTA}{}{RESET}", "-".repeat(40))?;
    }

    Ok(())
}

fn text_or_missing(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING)
}

fn temp_or_missing(value: Option<i32>) -> String {
    value.map_or_else(|| MISSING.to_string(), |t| t.to_string())
}

fn wind(record: &ForecastRecord) -> String {
    record
        .wind_speed_ms
        .map_or_else(|| MISSING.to_string(), |v| format!("{v:.2}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use forecast_core::ExtractionError;

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    fn record(hour: u32, condition: &str, temperature: i32) -> ForecastRecord {
        ForecastRecord {
            timestamp: at(hour),
            end_timestamp: None,
            city: "Jakarta".to_string(),
            weather_condition: condition.to_string(),
            temperature,
            wind_speed_ms: Some(10.0),
            humidity: Some("60".to_string()),
            feels_like: None,
            min_temp: None,
            max_temp: None,
        }
    }

    fn render(forecast: &Forecast) -> String {
        let mut buf = Vec::new();
        super::forecast(&mut buf, forecast, WeatherTranslationTable::global()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn today_report_shows_translated_weather_and_placeholders() {
        let out = render(&Forecast {
            kind: ForecastKind::Today,
            records: vec![record(14, "Partly cloudy", 22), record(15, "Blizzard", 20)],
        });

        assert!(out.contains("Berhasil mengambil data cuaca"));
        assert!(out.contains("2025-03-01 14:00:00"));
        assert!(out.contains("Berawan Sebagian ⛅"));
        assert!(out.contains("Blizzard ❓"));
        assert!(out.contains("22°C"));
        assert!(out.contains("-°C"));
        assert!(out.contains("60%"));
        assert!(out.contains("10.00 m/s"));
    }

    #[test]
    fn weekly_report_includes_extremes_and_long_date() {
        let mut r = record(0, "Sunny", 29);
        r.min_temp = Some(21);
        r.max_temp = Some(31);

        let out = render(&Forecast { kind: ForecastKind::Weekly, records: vec![r] });

        assert!(out.contains("PREDIKSI CUACA MINGGUAN"));
        assert!(out.contains("Saturday, 01 March 2025"));
        assert!(out.contains("29°C (Min: 21°C, Max: 31°C)"));
        assert!(out.contains("Cerah ☀️"));
    }

    #[test]
    fn monthly_report_numbers_weeks_and_shows_period() {
        let start = at(9);
        let weeks: Vec<ForecastRecord> = (0..2)
            .map(|i| {
                let week_start = start + Duration::days(7 * i);
                ForecastRecord {
                    timestamp: week_start,
                    end_timestamp: Some(week_start + Duration::days(6)),
                    city: "Jakarta".to_string(),
                    weather_condition: "Light rain".to_string(),
                    temperature: 30,
                    wind_speed_ms: None,
                    humidity: None,
                    feels_like: None,
                    min_temp: Some(24),
                    max_temp: Some(33),
                }
            })
            .collect();

        let out = render(&Forecast { kind: ForecastKind::Monthly, records: weeks });

        assert!(out.contains("Minggu 1"));
        assert!(out.contains("Minggu 2"));
        assert!(out.contains("Periode: 01 March - 07 March 2025"));
        assert!(out.contains("Periode: 08 March - 14 March 2025"));
        assert!(out.contains("Rata-rata Suhu: 30°C"));
        assert!(out.contains("Range Suhu: 24°C - 33°C"));
        assert!(out.contains("Hujan Ringan 🌧️"));
    }

    #[test]
    fn empty_forecast_says_no_data() {
        let out = render(&Forecast { kind: ForecastKind::Weekly, records: vec![] });
        assert!(out.contains("Tidak ada data"));
    }

    #[test]
    fn error_lines_name_the_failure() {
        let mut buf = Vec::new();
        let err = ForecastError::from(ExtractionError::missing_section("weather"));
        error(&mut buf, &err).unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Data cuaca tidak lengkap"));
        assert!(out.contains("weather"));
        assert!(out.contains("Tips"));
    }

    #[test]
    fn menu_lists_all_choices() {
        let mut buf = Vec::new();
        menu(&mut buf).unwrap();

        let out = String::from_utf8(buf).unwrap();
        for key in ["1.", "2.", "3.", "q."] {
            assert!(out.contains(key));
        }
    }
}
