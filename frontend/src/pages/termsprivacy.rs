use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::layout::Layout;
use crate::config;

const EFFECTIVE_DATE: &str = "January 14, 2026";
const POSTAL_ADDRESS: &str = "28, Savadi Street, Surakudy, Karaikal";

struct LegalSection {
    heading: Option<&'static str>,
    intro: Option<&'static str>,
    items: &'static [&'static str],
    outro: Option<&'static str>,
}

const PRIVACY_SECTIONS: &[LegalSection] = &[
    LegalSection {
        heading: None,
        intro: Some("LocalFix (\"we\", \"our\", \"us\") respects your privacy and is committed to protecting the personal information you share with us. This Privacy Policy explains how we collect, use, store, and protect your information when you use our website, mobile application, or services."),
        items: &[],
        outro: None,
    },
    LegalSection {
        heading: Some("1. Information We Collect"),
        intro: Some("We may collect the following information:"),
        items: &[
            "Name",
            "Phone number",
            "Email address",
            "Location details (only for service availability)",
            "Service requests and preferences",
            "Device and usage information (for app performance and security)",
        ],
        outro: Some("We do not collect sensitive personal data unless required to provide our services."),
    },
    LegalSection {
        heading: Some("2. How We Use Your Information"),
        intro: Some("Your information is used to:"),
        items: &[
            "Connect you with relevant local service providers",
            "Communicate service updates and confirmations",
            "Improve our platform and user experience",
            "Ensure safety, security, and fraud prevention",
            "Comply with legal requirements",
        ],
        outro: None,
    },
    LegalSection {
        heading: Some("3. Sharing of Information"),
        intro: Some("We may share limited information with:"),
        items: &[
            "Verified service providers to fulfill your request",
            "Technology partners who support platform operations",
            "Legal authorities if required by law",
        ],
        outro: Some("We do not sell your personal information to third parties."),
    },
    LegalSection {
        heading: Some("4. Data Security"),
        intro: Some("We use reasonable technical and organizational measures to protect your data against unauthorized access, loss, or misuse."),
        items: &[],
        outro: None,
    },
    LegalSection {
        heading: Some("5. Data Retention"),
        intro: Some("We retain your information only for as long as necessary to provide services or comply with legal obligations."),
        items: &[],
        outro: None,
    },
    LegalSection {
        heading: Some("6. Your Rights"),
        intro: Some("You may:"),
        items: &[
            "Request access to your data",
            "Request correction or deletion",
            "Withdraw consent where applicable",
            "Contact us to exercise these rights",
        ],
        outro: None,
    },
    LegalSection {
        heading: Some("7. Changes to This Policy"),
        intro: Some("We may update this Privacy Policy from time to time. Updates will be posted on this page."),
        items: &[],
        outro: None,
    },
];

const TERMS_SECTIONS: &[LegalSection] = &[
    LegalSection {
        heading: None,
        intro: Some("Welcome to LocalFix. By accessing or using our platform, you agree to these Terms and Conditions. Please read them carefully."),
        items: &[],
        outro: None,
    },
    LegalSection {
        heading: Some("1. About LocalFix"),
        intro: Some("LocalFix is a platform that connects users with independent local service providers. LocalFix does not directly provide services and is not responsible for the execution of services."),
        items: &[],
        outro: None,
    },
    LegalSection {
        heading: Some("2. User Responsibilities"),
        intro: Some("You agree to:"),
        items: &[
            "Provide accurate information",
            "Use the platform for lawful purposes only",
            "Not misuse or attempt to disrupt the platform",
            "Respect service providers and platform policies",
        ],
        outro: None,
    },
    LegalSection {
        heading: Some("3. Service Providers"),
        intro: None,
        items: &[
            "Service providers are independent professionals",
            "LocalFix does not guarantee service quality, pricing, or timelines",
            "Any agreement is directly between the user and the service provider",
        ],
        outro: None,
    },
    LegalSection {
        heading: Some("4. Payments"),
        intro: None,
        items: &[
            "Payments, if applicable, are processed through authorized payment partners",
            "LocalFix is not responsible for payment disputes between users and providers unless explicitly stated",
        ],
        outro: None,
    },
    LegalSection {
        heading: Some("5. Cancellations & Refunds"),
        intro: None,
        items: &[
            "Cancellation and refund policies may vary by service",
            "Any applicable refunds will be processed according to the stated policy at the time of booking",
        ],
        outro: None,
    },
    LegalSection {
        heading: Some("6. Limitation of Liability"),
        intro: Some("LocalFix is not liable for:"),
        items: &[
            "Service delays or failures",
            "Loss or damages arising from provider services",
            "Indirect or consequential damages",
        ],
        outro: None,
    },
    LegalSection {
        heading: Some("7. Termination"),
        intro: Some("We reserve the right to suspend or terminate access if these terms are violated."),
        items: &[],
        outro: None,
    },
    LegalSection {
        heading: Some("8. Changes to Terms"),
        intro: Some("We may update these Terms from time to time. Continued use of the platform means acceptance of updated terms."),
        items: &[],
        outro: None,
    },
    LegalSection {
        heading: Some("9. Governing Law"),
        intro: Some("These Terms are governed by the laws of India."),
        items: &[],
        outro: None,
    },
];

fn render_section(section: &LegalSection) -> Html {
    html! {
        <section>
            if let Some(heading) = section.heading {
                <h2>{heading}</h2>
            }
            if let Some(intro) = section.intro {
                <p>{intro}</p>
            }
            if !section.items.is_empty() {
                <ul>
                    { for section.items.iter().map(|item| html! { <li>{*item}</li> }) }
                </ul>
            }
            if let Some(outro) = section.outro {
                <p>{outro}</p>
            }
        </section>
    }
}

fn render_legal_page(title: &'static str, sections: &[LegalSection], contact_heading: String) -> Html {
    html! {
        <Layout>
            <div class="legal-page">
                <div class="container">
                    <h1>{title}</h1>
                    <p class="last-updated">{format!("Effective Date: {}", EFFECTIVE_DATE)}</p>
                    { for sections.iter().map(render_section) }
                    <section>
                        <h2>{contact_heading}</h2>
                        <ul>
                            <li>{format!("📧 Email: {}", config::SUPPORT_EMAIL)}</li>
                            <li>{format!("📍 Address: {}", POSTAL_ADDRESS)}</li>
                        </ul>
                    </section>
                </div>
            </div>
            <style>
                {r#"
.legal-page {
    padding: 4rem 0;
    background: #f8fafc;
}
.legal-page .container {
    max-width: 800px;
}
.legal-page h1 {
    font-size: 2.4rem;
    margin-bottom: 0.5rem;
}
.last-updated {
    color: var(--muted);
    margin-bottom: 2.5rem;
}
.legal-page section {
    background: #fff;
    border-radius: 16px;
    padding: 1.75rem 2rem;
    margin-bottom: 1.25rem;
    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.04);
}
.legal-page h2 {
    font-size: 1.3rem;
    margin-bottom: 1rem;
}
.legal-page p, .legal-page li {
    color: #475467;
    line-height: 1.7;
}
.legal-page ul {
    padding-left: 1.25rem;
}
                "#}
            </style>
        </Layout>
    }
}

/// Number of the closing contact section, following the numbered ones.
fn contact_heading(sections: &[LegalSection], label: &str) -> String {
    let numbered = sections.iter().filter(|s| s.heading.is_some()).count();
    format!("{}. {}", numbered + 1, label)
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    use_title("Privacy Policy | LocalFix".to_string());
    render_legal_page(
        "Privacy Policy",
        PRIVACY_SECTIONS,
        contact_heading(PRIVACY_SECTIONS, "Contact Us"),
    )
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    use_title("Terms & Conditions | LocalFix".to_string());
    render_legal_page(
        "Terms & Conditions",
        TERMS_SECTIONS,
        contact_heading(TERMS_SECTIONS, "Contact Information"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_section_follows_numbering() {
        assert_eq!(contact_heading(PRIVACY_SECTIONS, "Contact Us"), "8. Contact Us");
        assert_eq!(
            contact_heading(TERMS_SECTIONS, "Contact Information"),
            "10. Contact Information"
        );
    }

    #[test]
    fn headings_are_numbered_in_order() {
        for sections in [PRIVACY_SECTIONS, TERMS_SECTIONS] {
            let numbers: Vec<usize> = sections
                .iter()
                .filter_map(|s| s.heading)
                .map(|h| h.split('.').next().unwrap().parse().unwrap())
                .collect();
            let expected: Vec<usize> = (1..=numbers.len()).collect();
            assert_eq!(numbers, expected);
        }
    }
}
