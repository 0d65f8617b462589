use super::{
    Badge, CompanyInfo, ContactInfo, Highlight, Link, ProcessStep, SelectOption, Service,
    ServiceCategory, Stat, Testimonial,
};

pub static COMPANY_INFO: CompanyInfo = CompanyInfo {
    name: "FiveStarsCleaning",
    tagline: "Professional Cleaning Services in Queenstown",
    description: "Queenstown's trusted cleaning service provider. We deliver exceptional cleaning \
        solutions for homes and businesses with a commitment to quality, reliability, and \
        customer satisfaction.",
    founded_year: 2015,
};

pub static CONTACT_INFO: ContactInfo = ContactInfo {
    phone: "+64 22 503 0102",
    email: "info@fivestarscleaning.co.nz",
    address: "10 Athol Street, Queenstown 9300, New Zealand",
    hours: "Monday - Friday: 8:00 AM - 6:00 PM, Saturday: 9:00 AM - 4:00 PM",
};

pub static NAV_LINKS: &[Link] = &[
    Link { label: "Home", href: "/" },
    Link { label: "Services", href: "/services" },
    Link { label: "About", href: "/about" },
    Link { label: "Contact", href: "/contact" },
];

pub static SOCIAL_LINKS: &[Link] = &[
    Link { label: "Facebook", href: "https://facebook.com/fivestarscleaning" },
    Link { label: "Instagram", href: "https://instagram.com/fivestarscleaning" },
    Link { label: "LinkedIn", href: "https://linkedin.com/company/fivestarscleaning" },
];

pub static SERVICE_AREAS: &[&str] = &["Queenstown Central", "Frankton", "Arrowtown", "Kelvin Heights"];

pub static SERVICES: &[Service] = &[
    Service {
        id: "residential",
        name: "Residential Cleaning",
        description: "Professional home cleaning services tailored to your needs. We ensure your \
            living space is spotless and comfortable.",
        icon: "home",
        features: &[
            "Regular weekly or fortnightly cleaning",
            "Kitchen and bathroom deep clean",
            "Dusting and vacuuming all rooms",
            "Floor mopping and polishing",
            "Window sill and surface cleaning",
        ],
        category: ServiceCategory::Residential,
    },
    Service {
        id: "commercial",
        name: "Commercial Cleaning",
        description: "Comprehensive cleaning solutions for offices, retail spaces, and commercial \
            properties. Keep your business looking professional.",
        icon: "business",
        features: &[
            "Office and workspace cleaning",
            "Reception and common area maintenance",
            "Restroom sanitization",
            "Floor care and carpet cleaning",
            "Waste management and recycling",
        ],
        category: ServiceCategory::Commercial,
    },
    Service {
        id: "airbnb-turnover",
        name: "Airbnb Turnover",
        description: "Quick and thorough cleaning between guest stays. We help you maintain 5-star \
            reviews with pristine property presentation.",
        icon: "hotel",
        features: &[
            "Fast turnaround between guests",
            "Linen change and bed making",
            "Full kitchen and bathroom reset",
            "Restocking essentials check",
            "Property inspection report",
        ],
        category: ServiceCategory::Commercial,
    },
    Service {
        id: "deep-cleaning",
        name: "Deep Cleaning",
        description: "Intensive cleaning service that reaches every corner. Perfect for seasonal \
            cleaning or when your space needs extra attention.",
        icon: "cleaning_services",
        features: &[
            "Behind and under furniture cleaning",
            "Appliance deep clean (oven, fridge)",
            "Grout and tile scrubbing",
            "Light fixture and ceiling fan cleaning",
            "Baseboard and door frame detailing",
        ],
        category: ServiceCategory::Residential,
    },
    Service {
        id: "move-in-out",
        name: "Move In/Out Cleaning",
        description: "Comprehensive cleaning for property transitions. Leave your old place \
            spotless or start fresh in your new home.",
        icon: "package_2",
        features: &[
            "Complete property sanitization",
            "Carpet steam cleaning",
            "Wall mark and scuff removal",
            "Cabinet and closet cleaning",
            "Garage and outdoor area sweep",
        ],
        category: ServiceCategory::Residential,
    },
];

pub static FEATURES: &[Highlight] = &[
    Highlight {
        id: "fully-insured",
        title: "Fully Insured",
        description: "Complete peace of mind with comprehensive insurance coverage for all our cleaning services.",
        icon: "verified_user",
    },
    Highlight {
        id: "experienced-team",
        title: "Experienced Team",
        description: "Our professional cleaners have years of experience and undergo rigorous training.",
        icon: "groups",
    },
    Highlight {
        id: "reliability",
        title: "Reliability",
        description: "We show up on time, every time. Count on us for consistent, dependable service.",
        icon: "schedule",
    },
    Highlight {
        id: "consistent-quality",
        title: "Consistent Quality",
        description: "Every clean meets our high standards with detailed checklists and quality checks.",
        icon: "workspace_premium",
    },
    Highlight {
        id: "eco-friendly",
        title: "Eco-Friendly",
        description: "We use environmentally safe cleaning products that are gentle on your home and the planet.",
        icon: "eco",
    },
    Highlight {
        id: "trusted-local",
        title: "Trusted Local",
        description: "Proudly serving Queenstown communities with a team that knows and cares about local needs.",
        icon: "location_on",
    },
];

pub static VALUES: &[Highlight] = &[
    Highlight {
        id: "quality",
        title: "Quality",
        description: "We never compromise on the quality of our work. Every clean is performed to the highest standards.",
        icon: "star",
    },
    Highlight {
        id: "consistency",
        title: "Consistency",
        description: "You can expect the same excellent results every single time we clean your space.",
        icon: "autorenew",
    },
    Highlight {
        id: "trust",
        title: "Trust",
        description: "We build lasting relationships with our clients based on honesty, reliability, and respect.",
        icon: "handshake",
    },
    Highlight {
        id: "satisfaction",
        title: "Satisfaction",
        description: "Your happiness is our priority. We are not satisfied until you are completely satisfied.",
        icon: "sentiment_satisfied",
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "testimonial-1",
        name: "Sarah Mitchell",
        location: "Queenstown Central",
        rating: 5,
        content: "FiveStarsCleaning has transformed our home! Their attention to detail is \
            incredible, and the team is always friendly and professional. I highly recommend \
            their services to anyone looking for reliable cleaning.",
    },
    Testimonial {
        id: "testimonial-2",
        name: "James Chen",
        location: "Frankton, Queenstown",
        rating: 5,
        content: "As a busy professional, having FiveStarsCleaning take care of my apartment has \
            been a game-changer. They are punctual, thorough, and my place has never looked \
            better. Worth every penny!",
    },
    Testimonial {
        id: "testimonial-3",
        name: "Emma Thompson",
        location: "Arrowtown",
        rating: 5,
        content: "We use FiveStarsCleaning for our Airbnb properties and the results are \
            consistently excellent. Our guests always comment on how clean and fresh everything \
            is. Truly five-star service!",
    },
];

pub static STATS: &[Stat] = &[
    Stat { value: "5k+", label: "Homes Cleaned", icon: "home" },
    Stat { value: "98%", label: "Client Retention", icon: "favorite" },
    Stat { value: "100%", label: "Satisfaction Guaranteed", icon: "thumb_up" },
];

pub static TRUST_BADGES: &[Badge] = &[
    Badge { icon: "verified_user", label: "Fully Insured" },
    Badge { icon: "thumb_up", label: "100% Satisfaction" },
    Badge { icon: "eco", label: "Eco-Friendly" },
];

pub static PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        step: 1,
        title: "Book Online",
        description: "Schedule your cleaning service online or give us a call. Choose a time that works for you.",
        icon: "calendar_month",
    },
    ProcessStep {
        step: 2,
        title: "We Clean",
        description: "Our professional team arrives on time and cleans your space to perfection.",
        icon: "cleaning_services",
    },
    ProcessStep {
        step: 3,
        title: "Enjoy",
        description: "Relax and enjoy your spotless, fresh-smelling home or office space.",
        icon: "sentiment_very_satisfied",
    },
];

pub static SERVICE_TYPES: &[SelectOption] = &[
    SelectOption { value: "", label: "Select a service" },
    SelectOption { value: "residential", label: "Residential Cleaning" },
    SelectOption { value: "commercial", label: "Commercial Cleaning" },
    SelectOption { value: "airbnb", label: "Airbnb Turnover" },
    SelectOption { value: "deep-cleaning", label: "Deep Cleaning" },
    SelectOption { value: "move-in-out", label: "Move In/Out Cleaning" },
    SelectOption { value: "other", label: "Other" },
];
