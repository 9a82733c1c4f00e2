//! Static copy for the page sections.

pub const BRAND: &str = "BetterCT";

pub struct FeatureItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// File stem of the showcase image under the template image base URL.
    pub image: &'static str,
}

pub const FEATURES: &[FeatureItem] = &[
    FeatureItem {
        icon: super::icons::ICON_DASHBOARD,
        title: "Dashboard",
        description: "A snapshot of the metrics and data points that matter most for your product.",
        image: "dash",
    },
    FeatureItem {
        icon: super::icons::ICON_MOBILE,
        title: "Mobile integration",
        description: "Everything you need to know about the mobile app version of the product.",
        image: "mobile",
    },
    FeatureItem {
        icon: super::icons::ICON_DEVICES,
        title: "Available on all platforms",
        description: "Use the product wherever you work: on the web, on mobile and on the desktop.",
        image: "devices",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub occupation: &'static str,
    pub quote: &'static str,
    pub avatar: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Remy Sharp",
        occupation: "Senior Engineer",
        quote: "I absolutely love how versatile this product is! Whether I'm tackling work projects or indulging in my favorite hobbies, it seamlessly adapts to my changing needs. Its intuitive design has made my daily routine more efficient and enjoyable.",
        avatar: 1,
    },
    Testimonial {
        name: "Travis Howard",
        occupation: "Lead Product Designer",
        quote: "One of the standout features of this product is the exceptional customer support. In my experience, the team behind it has been quick to respond and incredibly helpful. It's reassuring to know they stand firmly behind their product.",
        avatar: 2,
    },
    Testimonial {
        name: "Cindy Baker",
        occupation: "CTO",
        quote: "The simplicity and user-friendliness of this product have made my life so much easier. I'm grateful to the creators for delivering a solution that not only meets but exceeds user expectations.",
        avatar: 3,
    },
    Testimonial {
        name: "Julia Stewart",
        occupation: "Senior Engineer",
        quote: "I appreciate the attention to detail in the design of this product. The small touches make a big difference, and it's evident that the creators focused on delivering a premium experience.",
        avatar: 4,
    },
    Testimonial {
        name: "John Smith",
        occupation: "Product Designer",
        quote: "I've tried other similar products, but this one stands out for its innovative features. It's clear that the makers put a lot of thought into creating a solution that truly addresses user needs.",
        avatar: 5,
    },
    Testimonial {
        name: "Daniel Wolf",
        occupation: "CDO",
        quote: "The quality of this product exceeded my expectations. It's durable, well-designed and built to last. Definitely worth the investment!",
        avatar: 6,
    },
];

const LOGO_BASE: &str = "https://assets-global.website-files.com/61ed56ae9da9fd7e0ef0a967";

/// Customer logos shown on light backgrounds.
pub const DARK_LOGOS: &[&str] = &[
    "6560628889c3bdf1129952dc_Sydney-black.svg",
    "655f4d4d8b829a89976a419c_Bern-black.svg",
    "655f467502f091ccb929529d_Montreal-black.svg",
    "61f12e911fa22f2203d7514c_TerraDark.svg",
    "6560a0990f3717787fd49245_colorado-black.svg",
    "655f5ca4e548b0deb1041c33_Ankara-black.svg",
];

/// Customer logos shown on dark backgrounds.
pub const WHITE_LOGOS: &[&str] = &[
    "6560628e8573c43893fe0ace_Sydney-white.svg",
    "655f4d520d0517ae8e8ddf13_Bern-white.svg",
    "655f46794c159024c1af6d44_Montreal-white.svg",
    "61f12e891fa22f89efd7477a_TerraLight.svg",
    "6560a09d1f6337b1dfed14ab_colorado-white.svg",
    "655f5caa77bf7d69fb78792e_Ankara-white.svg",
];

pub fn logo_url(file: &str) -> String {
    format!("{LOGO_BASE}/{file}")
}

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: super::icons::ICON_SETTINGS,
        title: "Adaptable performance",
        description: "Our product effortlessly adjusts to your needs, boosting efficiency and simplifying your tasks.",
    },
    Highlight {
        icon: super::icons::ICON_CONSTRUCTION,
        title: "Built to last",
        description: "Experience unmatched durability that goes above and beyond with lasting investment.",
    },
    Highlight {
        icon: super::icons::ICON_THUMB_UP,
        title: "Great user experience",
        description: "Integrate our product into your routine with an intuitive and easy-to-use interface.",
    },
    Highlight {
        icon: super::icons::ICON_AUTO_FIX,
        title: "Innovative functionality",
        description: "Stay ahead with features that set new standards, addressing your evolving needs better than the rest.",
    },
    Highlight {
        icon: super::icons::ICON_SUPPORT,
        title: "Reliable support",
        description: "Count on our responsive customer support, offering assistance that goes beyond the purchase.",
    },
    Highlight {
        icon: super::icons::ICON_QUERY_STATS,
        title: "Precision in every detail",
        description: "Enjoy a meticulously crafted product where small touches make a significant impact on your overall experience.",
    },
];

pub struct PricingTier {
    pub title: &'static str,
    pub price: &'static str,
    pub recommended: bool,
    pub description: &'static [&'static str],
    pub button_text: &'static str,
    /// Entry point the tier's button leads to.
    pub href: &'static str,
}

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        title: "Free",
        price: "0",
        recommended: false,
        description: &[
            "10 users included",
            "2 GB of storage",
            "Help center access",
            "Email support",
        ],
        button_text: "Sign up for free",
        href: "/sign-up",
    },
    PricingTier {
        title: "Professional",
        price: "15",
        recommended: true,
        description: &[
            "20 users included",
            "10 GB of storage",
            "Help center access",
            "Priority email support",
            "Dedicated team",
            "Best deals",
        ],
        button_text: "Start now",
        href: "/sign-up",
    },
    PricingTier {
        title: "Enterprise",
        price: "30",
        recommended: false,
        description: &[
            "50 users included",
            "30 GB of storage",
            "Help center access",
            "Phone & email support",
        ],
        button_text: "Contact us",
        href: "/sign-in",
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How do I contact customer support if I have a question or issue?",
        answer: "You can reach our customer support team by emailing support@betterct.dev or calling our toll-free number. We're here to assist you promptly.",
    },
    Faq {
        question: "Can I return the product if it doesn't meet my expectations?",
        answer: "Absolutely! We offer a hassle-free return policy. If you're not completely satisfied, you can return the product within 30 days for a full refund or exchange.",
    },
    Faq {
        question: "What makes your product stand out from others in the market?",
        answer: "Our product distinguishes itself through its adaptability, durability and innovative features. We prioritize user satisfaction and continually strive to exceed expectations in every aspect.",
    },
    Faq {
        question: "Is there a warranty on the product, and what does it cover?",
        answer: "Yes, our product comes with a one-year warranty. It covers defects in materials and workmanship. If you encounter any issues covered by the warranty, please contact our customer support for assistance.",
    },
];

pub struct LinkGroup {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_LINKS: &[LinkGroup] = &[
    LinkGroup {
        heading: "Product",
        links: &["Features", "Testimonials", "Highlights", "Pricing", "FAQs"],
    },
    LinkGroup {
        heading: "Company",
        links: &["About us", "Careers", "Press"],
    },
    LinkGroup {
        heading: "Legal",
        links: &["Terms", "Privacy", "Contact"],
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/SolomonCaptain",
        icon: super::icons::ICON_GITHUB,
    },
    SocialLink {
        label: "X",
        href: "https://x.com/Istahhffuuf",
        icon: super::icons::ICON_X,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/company/mui/",
        icon: super::icons::ICON_LINKEDIN,
    },
];

pub const COPYRIGHT_HOLDER: &str = "Istaroth";
pub const COPYRIGHT_HREF: &str = "https://www.istaroth.xin";

/// Section anchors in the app bar, in page order.
pub const SECTION_LINKS: &[(&str, &str)] = &[
    ("Features", "features"),
    ("Testimonials", "testimonials"),
    ("Highlights", "highlights"),
    ("Pricing", "pricing"),
    ("FAQ", "faq"),
];
