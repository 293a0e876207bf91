//! Plain-text rendering of every page.

use std::fmt::{self, Display, Formatter};

use super::Route;
use super::content::*;
use crate::render::counter_text;

/// A page ready to print: header, body for its route, footer.
pub struct PageView {
    route: Route,
}

impl PageView {
    pub fn new(route: Route) -> Self {
        Self { route }
    }

    pub fn for_path(path: &str) -> Self {
        Self::new(Route::resolve(path))
    }
}

impl Display for PageView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        header(f, self.route)?;
        match self.route {
            Route::Home => home(f)?,
            Route::About => about(f)?,
            Route::Programs => programs(f)?,
            Route::Events => events(f)?,
            Route::Media => media(f)?,
            Route::Volunteers => volunteers(f)?,
            Route::Contact => contact(f)?,
            Route::NotFound => not_found(f)?,
        }
        footer(f)
    }
}

fn header(f: &mut Formatter<'_>, current: Route) -> fmt::Result {
    writeln!(f, "{PARTY_NAME} ({PARTY_SHORT})")?;
    let nav: Vec<String> = NAV_ITEMS
        .iter()
        .map(|item| {
            if Route::resolve(item.href) == current {
                format!("[{}]", item.label)
            } else {
                item.label.to_string()
            }
        })
        .collect();
    writeln!(f, "{}", nav.join(" | "))?;
    writeln!(f)?;
    writeln!(f, "# {}", current.title())?;
    writeln!(f)
}

fn section(f: &mut Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "## {title}")
}

fn stats(f: &mut Formatter<'_>, stats: &[Stat]) -> fmt::Result {
    let width = stats.iter().map(|s| s.label.len()).max().unwrap_or(0);
    for stat in stats {
        writeln!(
            f,
            "  {:<width$}  {}",
            stat.label,
            counter_text(stat.value, stat.suffix)
        )?;
    }
    Ok(())
}

fn items(f: &mut Formatter<'_>, items: &[Item]) -> fmt::Result {
    for item in items {
        writeln!(f, "- {}: {}", item.title, item.description)?;
    }
    Ok(())
}

fn home(f: &mut Formatter<'_>) -> fmt::Result {
    writeln!(f, "Empowering Members, Strengthening the Party")?;
    stats(f, STATS)?;

    section(f, "What We Stand For")?;
    items(f, MISSION_ITEMS)?;

    section(f, "Latest News")?;
    for article in NEWS_ARTICLES {
        writeln!(f, "- [{}] {} ({})", article.category, article.title, article.date)?;
        writeln!(f, "  {}", article.excerpt)?;
    }

    section(f, "Upcoming Events")?;
    for event in UPCOMING_EVENTS {
        writeln!(f, "- {} | {} | {} ({})", event.date, event.title, event.location, event.kind)?;
    }

    section(f, "Our Impact")?;
    stats(f, IMPACT_METRICS)
}

fn about(f: &mut Formatter<'_>) -> fmt::Result {
    section(f, "Our Journey")?;
    for m in TIMELINE {
        writeln!(f, "- {} {}: {}", m.year, m.title, m.description)?;
    }

    section(f, "Core Values")?;
    items(f, CORE_VALUES)?;

    section(f, "Achievements")?;
    stats(f, &IMPACT_METRICS[..1])?;
    stats(f, &STATS[..1])?;
    stats(f, &IMPACT_METRICS[3..])?;
    stats(f, &STATS[3..])
}

fn programs(f: &mut Formatter<'_>) -> fmt::Result {
    section(f, "Training Programs")?;
    for p in TRAINING_PROGRAMS {
        writeln!(f, "- {} ({}, {}): {}", p.title, p.duration, p.format, p.description)?;
    }

    section(f, "Membership Benefits")?;
    for benefit in MEMBERSHIP_BENEFITS {
        writeln!(f, "- {benefit}")?;
    }

    section(f, "Areas of Interest")?;
    for (value, label) in AREAS_OF_INTEREST {
        writeln!(f, "- {label} ({value})")?;
    }

    section(f, "Resources")?;
    for r in RESOURCES {
        writeln!(f, "- {} [{}, {}]", r.title, r.kind, r.size)?;
    }

    section(f, "Community Poll")?;
    writeln!(f, "{}", POLL.question)?;
    for (i, option) in POLL.options.iter().enumerate() {
        writeln!(f, "  {}. {option}", i + 1)?;
    }
    Ok(())
}

fn events(f: &mut Formatter<'_>) -> fmt::Result {
    writeln!(f, "Upcoming events are loaded from the events service.")?;
    writeln!(f, "Filter by type: all, {}", EVENT_TYPES.join(", "))?;

    section(f, "Past Events")?;
    for e in PAST_EVENTS {
        writeln!(f, "- {} ({}): {} attendees", e.title, e.date, e.attendees)?;
    }
    Ok(())
}

fn media(f: &mut Formatter<'_>) -> fmt::Result {
    section(f, "Photo Gallery")?;
    writeln!(f, "Categories: All, {}", PHOTO_CATEGORIES.join(", "))?;
    for photo in PHOTOS {
        writeln!(f, "- #{} {} [{}]", photo.id, photo.title, photo.category)?;
    }

    section(f, "Videos")?;
    for v in VIDEOS {
        let star = if v.featured { " *featured*" } else { "" };
        writeln!(f, "- {} ({}, {} views){star}: {}", v.title, v.duration, v.views, v.description)?;
    }
    Ok(())
}

fn volunteers(f: &mut Formatter<'_>) -> fmt::Result {
    section(f, "Top Contributors")?;
    for c in TOP_CONTRIBUTORS {
        writeln!(
            f,
            "{}. {} - {} ({} pts) {}",
            c.rank,
            c.name,
            c.role,
            c.points,
            c.badges.join(", ")
        )?;
    }

    section(f, "Achievement Badges")?;
    items(f, ACHIEVEMENT_BADGES)?;

    section(f, "Networking")?;
    items(f, NETWORKING)
}

fn contact(f: &mut Formatter<'_>) -> fmt::Result {
    section(f, "Visit Us")?;
    for line in OFFICE_ADDRESS {
        writeln!(f, "  {line}")?;
    }

    section(f, "Call Us")?;
    for phone in OFFICE_PHONES {
        writeln!(f, "  {phone}")?;
    }

    section(f, "Office Hours")?;
    for (day, hours) in OFFICE_HOURS {
        writeln!(f, "  {day}: {hours}")?;
    }

    section(f, "Subjects")?;
    for (value, label) in CONTACT_SUBJECTS {
        writeln!(f, "- {label} ({value})")?;
    }
    Ok(())
}

fn not_found(f: &mut Formatter<'_>) -> fmt::Result {
    writeln!(f, "The page you are looking for does not exist.")?;
    writeln!(f, "Go back to / to continue browsing.")
}

fn footer(f: &mut Formatter<'_>) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "---")?;
    let social: Vec<&str> = SOCIAL_LINKS.iter().map(|(label, _)| *label).collect();
    writeln!(f, "Follow us: {}", social.join(" · "))?;
    writeln!(f, "Subscribe to our newsletter: party-site submit newsletter --email <you@example.org>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_shows_final_counter_values() {
        let page = PageView::for_path("/").to_string();
        assert!(page.contains("# Home"));
        assert!(page.contains("[Home]"));
        assert!(page.contains("50000+"));
        assert!(page.contains("32%"));
    }

    #[test]
    fn unknown_path_renders_not_found() {
        let page = PageView::for_path("/nowhere").to_string();
        assert!(page.contains("# Page Not Found"));
        assert!(!page.contains('['));
    }

    #[test]
    fn every_route_renders() {
        for route in Route::all() {
            let page = PageView::new(route).to_string();
            assert!(page.contains(route.title()), "{route:?}");
            assert!(page.ends_with('\n'));
        }
    }

    #[test]
    fn programs_lists_poll_options() {
        let page = PageView::new(Route::Programs).to_string();
        for option in POLL.options {
            assert!(page.contains(option));
        }
    }
}
