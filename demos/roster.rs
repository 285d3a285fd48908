use chrono::offset::TimeZone;
use chrono::{Duration, Utc};
use fuzzyrange::{DateRange, Endpoint};

fn main() {
    let people = ["Alice", "Bob", "Carol"];
    let mut roster = Vec::new();

    // Set up initial roster, one week per shift, each shift ending on
    // the day the next one starts.
    let start_of_roster = Utc.with_ymd_and_hms(2019, 1, 7, 9, 0, 0).unwrap();
    let mut week_start = start_of_roster;
    for _ in 0..3 {
        for person in &people {
            let next_week = week_start + Duration::weeks(1);
            // Shifts are given as datetimes; only the dates are kept.
            let shift = DateRange::truncating(week_start, next_week).unwrap();
            roster.push((shift, *person));
            week_start = next_week;
        }
    }

    // Carol takes a week off after her second shift, then covers
    // everything from there on.
    roster.truncate(6);
    let back = roster[5].0.end().map(|date| date + Duration::weeks(1));
    roster.push((DateRange::from_endpoints(back, Endpoint::Max).unwrap(), "Carol"));
    println!("Carol is back on {}", back.into_value().unwrap());

    for (shift, person) in &roster {
        println!("{} ({:?}): {}", shift, shift.duration(), person);
    }

    // Observe which shifts hand over directly and where the hole is.
    for pair in roster.windows(2) {
        let (current, current_person) = &pair[0];
        let (next, next_person) = &pair[1];
        if current.abuts(next) {
            println!("{} hands over to {}", current_person, next_person);
        } else {
            println!(
                "nobody on duty between {} and {}: {}",
                current_person,
                next_person,
                current.gap(next)
            );
        }
    }
}
