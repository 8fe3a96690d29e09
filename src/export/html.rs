use super::icons::place_icon;
use super::text::TIPS;
use super::{excerpt, generated_label, map};
use crate::models::TripPlan;
use std::fmt::Write;

const HTML_DESCRIPTION_CHARS: usize = 150;

const STYLE: &str = r#"
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #f5f5f5; }
        .header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 20px; border-radius: 10px; text-align: center; margin-bottom: 20px; }
        .place-card { background: white; padding: 15px; margin: 10px 0; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        .place-icon { font-size: 24px; margin-right: 10px; }
        .place-name { font-weight: bold; font-size: 18px; margin-bottom: 5px; }
        .place-details { color: #666; font-size: 14px; line-height: 1.4; }
        .weather-box { background: linear-gradient(135deg, #74b9ff 0%, #0984e3 100%); color: white; padding: 15px; border-radius: 8px; margin: 10px 0; }
        .summary { background: #e8f5e8; padding: 15px; border-radius: 8px; margin: 20px 0; }
"#;

/// Self-contained HTML page for offline viewing
pub fn render(plan: &TripPlan) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_page(&mut out, plan);
    out
}

fn write_page(out: &mut String, plan: &TripPlan) -> std::fmt::Result {
    let destination = escape(&plan.destination);

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "    <meta charset=\"UTF-8\">")?;
    writeln!(
        out,
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    )?;
    writeln!(out, "    <title>Trip Plan - {}</title>", destination)?;
    writeln!(out, "    <style>{}    </style>", STYLE)?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;

    writeln!(out, "    <div class=\"header\">")?;
    writeln!(out, "        <h1>🌍 {}</h1>", destination)?;
    writeln!(
        out,
        "        <p>⏱️ {} days | 💰 {}</p>",
        plan.duration_days, plan.budget
    )?;
    writeln!(out, "        <p>📅 {}</p>", generated_label(plan))?;
    writeln!(out, "    </div>")?;

    if let Some(weather) = &plan.weather {
        writeln!(out, "    <div class=\"weather-box\">")?;
        writeln!(out, "        <h3>🌤️ Weather</h3>")?;
        writeln!(out, "        <p>Temperature: {}°C</p>", weather.temperature_c)?;
        writeln!(out, "        <p>Conditions: {}</p>", escape(&weather.condition))?;
        for note in &plan.weather_considerations {
            writeln!(out, "        <p>• {}</p>", escape(note))?;
        }
        writeln!(out, "    </div>")?;
    }

    if !plan.itinerary.is_empty() {
        writeln!(out, "    <h2>🗺️ Itinerary</h2>")?;

        for (i, entry) in plan.itinerary.iter().enumerate() {
            let place = &entry.place;
            writeln!(out, "    <div class=\"place-card\">")?;
            writeln!(out, "        <div class=\"place-name\">")?;
            writeln!(
                out,
                "            <span class=\"place-icon\">{}</span>",
                place_icon(&place.name, &place.kinds)
            )?;
            writeln!(out, "            {}. {}", i + 1, escape(&place.name))?;
            writeln!(out, "        </div>")?;
            writeln!(out, "        <div class=\"place-details\">")?;
            writeln!(out, "            <p>⏰ Duration: {}</p>", escape(place.visit_duration.label()))?;
            writeln!(out, "            <p>🌅 Best Time: {}</p>", entry.best_time())?;
            writeln!(out, "            <p>💰 Cost: {}</p>", entry.estimated_cost)?;
            if let Some(description) = place.description.as_deref().filter(|d| !d.is_empty()) {
                writeln!(
                    out,
                    "            <p>📝 {}</p>",
                    escape(&excerpt(description, HTML_DESCRIPTION_CHARS))
                )?;
            }
            if let Some(leg) = &entry.route_to_next {
                writeln!(
                    out,
                    "            <p>🚗 {:.1} km to {}</p>",
                    leg.distance_km,
                    escape(&leg.next_place)
                )?;
                writeln!(
                    out,
                    "            <p>⏱️ {} travel time</p>",
                    escape(&leg.travel_time_formatted)
                )?;
            }
            writeln!(
                out,
                "            <p><a href=\"{}\">🔗 Open in Google Maps</a></p>",
                escape(&map::google_maps_link(&place.name, &plan.destination))
            )?;
            writeln!(out, "        </div>")?;
            writeln!(out, "    </div>")?;
        }
    }

    writeln!(out, "    <div class=\"summary\">")?;
    writeln!(out, "        <h3>📊 Summary</h3>")?;
    writeln!(out, "        <p>Total Duration: {} hours</p>", plan.total_visit_hours)?;
    writeln!(out, "        <p>Places to Visit: {}</p>", plan.itinerary.len())?;
    writeln!(
        out,
        "        <p>Total Distance: {:.1} km</p>",
        plan.summary.total_distance_km
    )?;
    writeln!(out, "        <p>Budget Level: {}</p>", plan.budget)?;
    writeln!(out, "    </div>")?;

    writeln!(out, "    <div class=\"summary\">")?;
    writeln!(out, "        <h3>💡 Tips</h3>")?;
    for tip in TIPS {
        writeln!(out, "        <p>• {}</p>", tip)?;
    }
    writeln!(out, "    </div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;

    Ok(())
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
