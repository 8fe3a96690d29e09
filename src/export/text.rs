use super::icons::place_icon;
use super::{excerpt, generated_label, map};
use crate::models::TripPlan;
use std::fmt::Write;

const MOBILE_DESCRIPTION_CHARS: usize = 100;
const RULE_WIDTH: usize = 50;

pub(crate) const TIPS: [&str; 4] = [
    "Save this plan offline for easy access",
    "Check opening hours before visiting",
    "Have backup plans for weather changes",
    "Keep emergency contacts handy",
];

/// Plain-text plan sized for a phone screen
pub fn render(plan: &TripPlan) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_plan(&mut out, plan);
    out
}

fn write_plan(out: &mut String, plan: &TripPlan) -> std::fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "🌍 TRAVEL PLAN: {}", plan.destination.to_uppercase())?;
    writeln!(out, "⏱️ Duration: {} days", plan.duration_days)?;
    writeln!(out, "💰 Budget: {}", plan.budget)?;
    writeln!(out, "📅 Generated: {}", generated_label(plan))?;
    writeln!(out)?;

    if let Some(weather) = &plan.weather {
        writeln!(
            out,
            "🌤️ Weather: {}°C, {}",
            weather.temperature_c, weather.condition
        )?;
        for note in &plan.weather_considerations {
            writeln!(out, "   • {}", note)?;
        }
        writeln!(out)?;
    }

    if !plan.itinerary.is_empty() {
        writeln!(out, "🗺️ ITINERARY:")?;
        writeln!(out, "{}", rule)?;
        writeln!(out)?;

        for (i, entry) in plan.itinerary.iter().enumerate() {
            let place = &entry.place;
            writeln!(
                out,
                "{}. {} {}",
                i + 1,
                place_icon(&place.name, &place.kinds),
                place.name
            )?;
            writeln!(out, "   ⏰ Duration: {}", place.visit_duration)?;
            writeln!(out, "   🌅 Best Time: {}", entry.best_time())?;
            writeln!(out, "   💰 Cost: {}", entry.estimated_cost)?;
            if let Some(description) = place.description.as_deref().filter(|d| !d.is_empty()) {
                writeln!(out, "   📝 {}", excerpt(description, MOBILE_DESCRIPTION_CHARS))?;
            }
            if let Some(leg) = &entry.route_to_next {
                writeln!(out, "   🚗 {:.1} km to {}", leg.distance_km, leg.next_place)?;
                writeln!(out, "   ⏱️ {} travel time", leg.travel_time_formatted)?;
            }
            writeln!(out, "   🔗 {}", map::google_maps_link(&place.name, &plan.destination))?;
            writeln!(out)?;
        }
    }

    if !plan.daily_breakdown.is_empty() {
        writeln!(out, "📅 DAILY BREAKDOWN:")?;
        writeln!(out, "{}", rule)?;
        writeln!(out)?;

        for day in &plan.daily_breakdown {
            writeln!(out, "{}:", day.label())?;
            for entry in &day.entries {
                writeln!(
                    out,
                    "  {} {} ({}) - {}",
                    place_icon(&entry.place.name, &entry.place.kinds),
                    entry.place.name,
                    entry.place.visit_duration,
                    entry.best_time()
                )?;
            }
            writeln!(out)?;
        }
    }

    writeln!(out, "📊 SUMMARY:")?;
    writeln!(out, "• Total Duration: {} hours", plan.total_visit_hours)?;
    writeln!(out, "• Places to Visit: {}", plan.itinerary.len())?;
    writeln!(
        out,
        "• Total Distance: {:.1} km ({} travel)",
        plan.summary.total_distance_km, plan.summary.total_travel_time_formatted
    )?;
    writeln!(out, "• Budget Level: {}", plan.budget)?;
    writeln!(out)?;

    if !plan.route_analysis.suggestions.is_empty() {
        writeln!(out, "🧭 ROUTE NOTES:")?;
        for suggestion in &plan.route_analysis.suggestions {
            writeln!(out, "• {}", suggestion)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "💡 TIPS:")?;
    for tip in TIPS {
        writeln!(out, "• {}", tip)?;
    }
    writeln!(out)?;
    writeln!(out, "Enjoy your trip to {}! 🌟", plan.destination)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_plan;

    #[test]
    fn test_mobile_text_sections() {
        let text = render(&sample_plan());

        assert!(text.starts_with("🌍 TRAVEL PLAN: NEW DELHI\n"));
        assert!(text.contains("📅 Generated: 2024-03-05 09:07"));
        assert!(text.contains("🌤️ Weather: 31°C, Clear"));
        assert!(text.contains("1. 🏰 Red Fort\n"));
        assert!(text.contains("2. 🏛️ National Museum\n"));
        assert!(text.contains("   🌅 Best Time: afternoon"));
        assert!(text.contains("   💰 Cost: $10-20"));
        assert!(text.contains("km to National Museum"));
        assert!(text.contains("Day 1:"));
        assert!(text.contains("• Places to Visit: 3"));
        assert!(text.ends_with("Enjoy your trip to New Delhi! 🌟\n"));
    }

    #[test]
    fn test_last_stop_has_no_leg() {
        let text = render(&sample_plan());
        let last_stop = text.split("3. ").nth(1).unwrap();
        let last_block = last_stop.split("\n\n").next().unwrap();
        assert!(!last_block.contains("🚗"));
    }
}
