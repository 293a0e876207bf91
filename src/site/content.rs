//! Static page content.

pub const PARTY_NAME: &str = "United People's Party";
pub const PARTY_SHORT: &str = "UPP";

pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", href: "/" },
    NavItem { label: "About", href: "/about" },
    NavItem { label: "Programs", href: "/programs" },
    NavItem { label: "Events", href: "/events" },
    NavItem { label: "Media", href: "/media" },
    NavItem { label: "Volunteers", href: "/volunteers" },
    NavItem { label: "Contact", href: "/contact" },
];

/// A number shown through an animated counter.
pub struct Stat {
    pub label: &'static str,
    pub value: i64,
    pub suffix: &'static str,
}

pub const STAT_DURATION_MS: i64 = 2500;
pub const IMPACT_DURATION_MS: i64 = 2000;

pub const STATS: &[Stat] = &[
    Stat { label: "Active Members", value: 50000, suffix: "+" },
    Stat { label: "Campaigns", value: 150, suffix: "" },
    Stat { label: "Volunteers", value: 12000, suffix: "+" },
    Stat { label: "Communities Served", value: 500, suffix: "+" },
];

pub const IMPACT_METRICS: &[Stat] = &[
    Stat { label: "Laws Proposed", value: 45, suffix: "" },
    Stat { label: "International Partners", value: 28, suffix: "" },
    Stat { label: "Growth Rate", value: 32, suffix: "%" },
    Stat { label: "Projects Completed", value: 180, suffix: "" },
];

pub struct Item {
    pub title: &'static str,
    pub description: &'static str,
}

pub const MISSION_ITEMS: &[Item] = &[
    Item {
        title: "Our Mission",
        description: "To unite citizens under a common vision of progress, equality, and sustainable development for all.",
    },
    Item {
        title: "Our Vision",
        description: "A nation where every citizen has equal opportunity to thrive and contribute to society.",
    },
    Item {
        title: "Our Values",
        description: "Integrity, transparency, and unwavering commitment to serving the people's interests.",
    },
];

pub struct NewsArticle {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub category: &'static str,
}

pub const NEWS_ARTICLES: &[NewsArticle] = &[
    NewsArticle {
        id: "1",
        title: "Youth Leadership Program Launches Nationwide",
        excerpt: "Our new initiative aims to train 10,000 young leaders across the country by 2025.",
        date: "Dec 5, 2024",
        category: "Programs",
    },
    NewsArticle {
        id: "2",
        title: "Community Development Project Breaks Ground",
        excerpt: "New infrastructure project set to benefit over 50,000 residents in rural areas.",
        date: "Dec 3, 2024",
        category: "Campaigns",
    },
    NewsArticle {
        id: "3",
        title: "Annual Party Convention Dates Announced",
        excerpt: "Mark your calendars for the biggest gathering of party members this year.",
        date: "Dec 1, 2024",
        category: "Events",
    },
];

pub struct Highlight {
    pub title: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
}

pub const UPCOMING_EVENTS: &[Highlight] = &[
    Highlight {
        title: "Town Hall Meeting",
        date: "Dec 15, 2024",
        location: "Central Community Hall",
        kind: "meeting",
    },
    Highlight {
        title: "Volunteer Training Workshop",
        date: "Dec 20, 2024",
        location: "Party Headquarters",
        kind: "training",
    },
    Highlight {
        title: "Fundraising Gala",
        date: "Dec 28, 2024",
        location: "Grand Convention Center",
        kind: "campaign",
    },
];

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        year: "1985",
        title: "Party Foundation",
        description: "United People's Party was established with a vision to unite citizens and promote democratic values.",
    },
    Milestone {
        year: "1990",
        title: "First Major Victory",
        description: "Won 25 parliamentary seats in our first general election, establishing a strong presence in national politics.",
    },
    Milestone {
        year: "2000",
        title: "National Expansion",
        description: "Expanded to all 50 districts with over 10,000 registered members across the country.",
    },
    Milestone {
        year: "2010",
        title: "Youth Wing Launch",
        description: "Established the Youth Leadership Program, training the next generation of political leaders.",
    },
    Milestone {
        year: "2020",
        title: "Historic Milestone",
        description: "Reached 50,000 active members and implemented 100+ community development projects.",
    },
    Milestone {
        year: "2024",
        title: "Digital Transformation",
        description: "Launched comprehensive digital platform to engage members and expand outreach globally.",
    },
];

pub const CORE_VALUES: &[Item] = &[
    Item {
        title: "Justice & Equality",
        description: "We believe in equal rights and opportunities for all citizens regardless of background.",
    },
    Item {
        title: "Integrity",
        description: "Transparency and honesty in all our actions and decisions form the core of our leadership.",
    },
    Item {
        title: "Sustainability",
        description: "Committed to environmental protection and sustainable development for future generations.",
    },
    Item {
        title: "Unity",
        description: "Bringing together diverse communities to work towards common goals and shared prosperity.",
    },
    Item {
        title: "Progress",
        description: "Driving innovation and modernization while respecting our cultural heritage and traditions.",
    },
    Item {
        title: "Compassion",
        description: "Putting people first and ensuring no citizen is left behind in our development journey.",
    },
];

pub struct TrainingProgram {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub format: &'static str,
}

pub const TRAINING_PROGRAMS: &[TrainingProgram] = &[
    TrainingProgram {
        title: "Leadership Development",
        description: "Comprehensive training on effective leadership, public speaking, and community organizing.",
        duration: "8 weeks",
        format: "online",
    },
    TrainingProgram {
        title: "Campaign Management",
        description: "Learn the fundamentals of running successful political campaigns and voter outreach.",
        duration: "6 weeks",
        format: "hybrid",
    },
    TrainingProgram {
        title: "Policy Analysis",
        description: "Deep dive into policy-making, research methods, and evidence-based advocacy.",
        duration: "10 weeks",
        format: "online",
    },
    TrainingProgram {
        title: "Community Organizing",
        description: "Master the art of building grassroots movements and mobilizing community support.",
        duration: "4 weeks",
        format: "in-person",
    },
];

pub struct Resource {
    pub title: &'static str,
    pub kind: &'static str,
    pub size: &'static str,
}

pub const RESOURCES: &[Resource] = &[
    Resource { title: "Party Constitution", kind: "PDF", size: "2.4 MB" },
    Resource { title: "Volunteer Handbook", kind: "PDF", size: "1.8 MB" },
    Resource { title: "Campaign Guidelines", kind: "PDF", size: "3.2 MB" },
    Resource { title: "Policy Manifesto 2024", kind: "PDF", size: "4.5 MB" },
];

pub const MEMBERSHIP_BENEFITS: &[&str] = &[
    "Recognition Programs",
    "Free Training Access",
    "Networking Events",
    "Legal Support",
    "Career Development",
    "Community Support",
];

/// (value, label) pairs offered by the registration form.
pub const AREAS_OF_INTEREST: &[(&str, &str)] = &[
    ("community", "Community Organizing"),
    ("campaign", "Campaign Activities"),
    ("policy", "Policy Research"),
    ("media", "Media & Communications"),
    ("youth", "Youth Programs"),
];

pub struct PollQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub options: &'static [&'static str],
}

pub const POLL: PollQuestion = PollQuestion {
    id: "priority-poll",
    question: "What should be our top priority for 2025?",
    options: &[
        "Education Reform",
        "Healthcare Access",
        "Economic Development",
        "Environmental Protection",
    ],
};

#[derive(Debug, PartialEq, Eq)]
pub struct Photo {
    pub id: u32,
    pub category: &'static str,
    pub title: &'static str,
}

pub const PHOTO_CATEGORIES: &[&str] = &["Campaigns", "Events", "Community"];

pub const PHOTOS: &[Photo] = &[
    Photo { id: 1, category: "Campaigns", title: "Rally 2024" },
    Photo { id: 2, category: "Events", title: "Annual Convention" },
    Photo { id: 3, category: "Community", title: "Youth Outreach" },
    Photo { id: 4, category: "Campaigns", title: "Door-to-Door Campaign" },
    Photo { id: 5, category: "Events", title: "Leadership Summit" },
    Photo { id: 6, category: "Community", title: "Volunteer Day" },
    Photo { id: 7, category: "Campaigns", title: "Town Hall Meeting" },
    Photo { id: 8, category: "Events", title: "Policy Forum" },
    Photo { id: 9, category: "Community", title: "Community Service" },
];

pub struct Video {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub views: &'static str,
    pub featured: bool,
}

pub const VIDEOS: &[Video] = &[
    Video {
        title: "2024 Campaign Launch",
        description: "Official launch of our 2024 election campaign",
        duration: "12:45",
        views: "24K",
        featured: true,
    },
    Video {
        title: "Chairman's New Year Address",
        description: "Annual message from party leadership",
        duration: "8:30",
        views: "18K",
        featured: false,
    },
    Video {
        title: "Youth Leadership Documentary",
        description: "Stories from our young leaders",
        duration: "25:00",
        views: "32K",
        featured: false,
    },
    Video {
        title: "Policy Explained: Healthcare",
        description: "Our vision for accessible healthcare",
        duration: "15:20",
        views: "12K",
        featured: false,
    },
];

pub struct Contributor {
    pub rank: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub points: u32,
    pub badges: &'static [&'static str],
}

pub const TOP_CONTRIBUTORS: &[Contributor] = &[
    Contributor {
        rank: 1,
        name: "Maria Santos",
        role: "Regional Coordinator",
        points: 2450,
        badges: &["Gold Volunteer", "100 Events", "Mentor"],
    },
    Contributor {
        rank: 2,
        name: "David Kim",
        role: "Campaign Manager",
        points: 2180,
        badges: &["Silver Volunteer", "Campaign Star"],
    },
    Contributor {
        rank: 3,
        name: "Aisha Patel",
        role: "Youth Organizer",
        points: 1950,
        badges: &["Rising Star", "Youth Leader"],
    },
    Contributor {
        rank: 4,
        name: "James O'Brien",
        role: "Community Liaison",
        points: 1820,
        badges: &["Community Champion"],
    },
    Contributor {
        rank: 5,
        name: "Lisa Chen",
        role: "Training Coordinator",
        points: 1690,
        badges: &["Educator", "50 Workshops"],
    },
];

pub const ACHIEVEMENT_BADGES: &[Item] = &[
    Item { title: "First Steps", description: "Complete your first task" },
    Item { title: "Campaign Hero", description: "Participate in 10 campaigns" },
    Item { title: "Community Builder", description: "Recruit 5 new members" },
    Item { title: "Top Volunteer", description: "Earn 1000 points" },
    Item { title: "Quick Responder", description: "First to RSVP to 10 events" },
    Item { title: "Dedicated", description: "Active for 6 months" },
    Item { title: "Goal Crusher", description: "Complete all monthly goals" },
    Item { title: "Leader", description: "Lead a committee or team" },
];

pub const NETWORKING: &[Item] = &[
    Item {
        title: "Weekly Volunteer Meetup",
        description: "Connect with fellow volunteers every Wednesday",
    },
    Item {
        title: "Mentor Program",
        description: "Get paired with experienced party leaders",
    },
    Item {
        title: "Discussion Forum",
        description: "Share ideas and collaborate on initiatives",
    },
];

pub struct PastEvent {
    pub title: &'static str,
    pub date: &'static str,
    pub attendees: u32,
}

pub const PAST_EVENTS: &[PastEvent] = &[
    PastEvent { title: "National Convention 2024", date: "November 2024", attendees: 5000 },
    PastEvent { title: "Regional Leadership Forum", date: "October 2024", attendees: 350 },
    PastEvent { title: "Voter Registration Drive", date: "September 2024", attendees: 1200 },
];

/// Event types the listing can be filtered by.
pub const EVENT_TYPES: &[&str] = &["town-hall", "workshop", "fundraiser", "appreciation", "forum"];

/// (value, label) pairs for the contact form's subject.
pub const CONTACT_SUBJECTS: &[(&str, &str)] = &[
    ("general", "General Inquiry"),
    ("membership", "Membership Question"),
    ("volunteer", "Volunteer Opportunities"),
    ("events", "Events & Programs"),
    ("media", "Media & Press"),
    ("other", "Other"),
];

pub const OFFICE_ADDRESS: &[&str] = &["123 Democracy Avenue", "Capital City, State 12345"];
pub const OFFICE_PHONES: &[&str] = &["+1 (555) 123-4567", "+1 (555) 987-6543"];

pub const OFFICE_HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 2:00 PM"),
    ("Sunday", "Closed"),
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "#"),
    ("Twitter", "#"),
    ("YouTube", "#"),
    ("Instagram", "#"),
];
