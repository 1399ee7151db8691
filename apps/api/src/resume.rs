//! The fixed résumé content, expressed as a document script.
//!
//! Content lives here, layout lives in `layout` — the script is the only
//! thing that crosses the boundary.

use crate::layout::{BulletItem, ContactField, ContentBlock, DocumentScript};

fn experience(
    title: &str,
    organization: &str,
    duration: &str,
    bullets: &[&str],
) -> ContentBlock {
    ContentBlock::ExperienceEntry {
        title: title.to_string(),
        organization: organization.to_string(),
        duration: duration.to_string(),
        bullets: bullets.iter().copied().map(BulletItem::plain).collect(),
    }
}

/// Builds the full résumé script in rendering order.
pub fn resume_script() -> DocumentScript {
    let mut script = DocumentScript::new();

    script.push(ContentBlock::NameHeader {
        name: "Muhammad Malik Hussein - Fullstack Developer".into(),
    });

    script.push(ContentBlock::SectionHeader {
        title: "Contact Information".into(),
    });
    script.push(ContentBlock::ContactInfo {
        fields: vec![
            ContactField::plain("Email", "123husena@gmail.com"),
            ContactField::plain("Phone", "+62 813 3697 9372"),
            ContactField::linked(
                "LinkedIn",
                "linkedin.com/in/husen-malik",
                "https://linkedin.com/in/husen-malik",
            ),
            ContactField::linked("GitHub", "github.com/13husen", "https://github.com/13husen"),
            ContactField::plain("Location", "Jakarta, Indonesia"),
        ],
    });

    script.push(ContentBlock::SectionHeader {
        title: "Summary".into(),
    });
    script.push(ContentBlock::Paragraph {
        text: "Results-driven Fullstack Developer with over 7 years of experience in \
               designing, developing, and maintaining scalable web applications. \
               Proficient in both frontend and backend technologies, with a passion for \
               clean code and agile methodologies. Strong experience with Java, \
               Springboot, JavaScript, TypeScript, PHP, Laravel, React, Angular, \
               Node.js, and cloud infrastructure (AWS, GCP)."
            .into(),
    });

    script.push(ContentBlock::SectionHeader {
        title: "Technical Skills".into(),
    });
    script.push(ContentBlock::BulletList {
        items: [
            "Languages: Java (Android, Servlet), Springboot, JavaFX, Quarkus , Python, \
             NodeJS, PHP (Laravel, YII, CI), React, Next.js, Angular, Vue 3, Flutter",
            "Low codes : Outsystems",
            "UI Frameworks:  Bootstrap, Materialize, Tailwind, Vuetify, Chakra UI, \
             PrimeUI, Material UI",
            "Tools: Docker, Kubernetes, Git, Jenkins, Webpack",
            "Cloud: AWS (EC2, S3, Lambda, Amplify), GCP, GCS",
            "Databases: PostgreSQL, MongoDB, MySQL, Redis",
            "Testing: Jest, JUnit, Mockito",
            "Methodologies: Agile, Scrum, TDD, CI/CD",
            "AI : OpenAI (Completion & Whisper API)",
        ]
        .iter()
        .copied()
        .map(BulletItem::plain)
        .collect(),
    });

    script.push(ContentBlock::SectionHeader {
        title: "Professional Experience".into(),
    });
    script.push(experience(
        "Fullstack Developer",
        "PT Bank Digital BCA",
        "Jan 2025 - Present",
        &[
            "Successfully completed given tasks as a full-stack developer for PT Bank \
             Digital BCA.",
            "utilizing AngularJS with Typescript for the frontend and Java Spring for \
             the backend",
        ],
    ));
    script.push(experience(
        "Fullstack Developer",
        "PT Prudential Life Assurance",
        "Dec 2022 - Dec 2024",
        &[
            "Developed full-stack applications using AngularJS (Typescript) and Java \
             Spring/Quarkus",
            "Collaborated with teams to deliver reliable and high-quality software",
            "Maintained clean, efficient code following best practices",
            "Maintained hundreds of microservices, including bugfix, enhance and create \
             new feature",
            "Performed testing and debugging to ensure smooth user experience",
            "Contributed to code reviews and documentation for better team collaboration",
            "Followed agile methodologies to meet project deadlines consistently",
        ],
    ));
    script.push(experience(
        "Fullstack Developer (Freelance)",
        "PT Diawan Dinamika Digital",
        "Jun 2024 - Nov 2024",
        &[
            "Delivered projects like pixlo.id and karir.diawan.id using various tech \
             stacks",
            "Built scalable full-stack applications with diverse frameworks and libraries",
            "Adapted quickly to new tools and trends in full-stack development",
        ],
    ));
    script.push(experience(
        "Fullstack Developer",
        "Kryst Digital Pte. Ltd",
        "Sep 2022 - Sep 2023",
        &[
            "Developed dApps using Typescript, Next.js, Node.js, NestJS, and MongoDB",
            "Integrated systems with Telegram Bot, GitHub, and third-party plugins",
            "Built responsive UIs with Tailwind CSS for optimal user experience",
            "Collaborated across teams to ensure smooth frontend-backend integration",
            "Contributed to code reviews and maintained clear documentation",
            "Solved technical issues quickly to support smooth project delivery",
        ],
    ));
    script.push(experience(
        "Fullstack Developer",
        "PT. Tema Data Rekayasa Digital",
        "Jul 2020 - Dec 2021",
        &[
            "Developed Android and web apps using TypeScript, Vue, Nuxt, and Flutter/Java",
            "Built clean, efficient APIs and responsive frontends with PHP Laravel / \
             Lumen",
            "Ensured feature integration through close team collaboration",
            "Contributed to code reviews and maintained project documentation",
            "Kept up with new tech trends to improve development practices",
        ],
    ));
    script.push(experience(
        "Backend Developer",
        " PT. Sandika Cahya Mandiri ( liteBIG )",
        "Jul 2017 - Jun 2020",
        &[
            "Transitioned from Web to Android Developer, demonstrating adaptability \
             across platforms",
            "Led backend API integration using CodeIgniter and Java Servlet (Tomcat) \
             with MySQL and Redis",
            "Integrated payment gateways (T-Money, Ipaymu, Billfazz) and messaging APIs \
             (Infobip, RajaSMS, Zenziva)",
            "Developed chat apps with Ejabberd and managed app deployment to Google \
             Play & App Store",
            "Collaborated across teams and contributed ideas to improve workflows and \
             innovation",
        ],
    ));

    script.push(ContentBlock::SectionHeader {
        title: "Education".into(),
    });
    script.push(ContentBlock::Paragraph {
        text: "Bachelor of Information Technology | Indraprasta PGRI University, South \
               Jakarta | 2018 - 2022"
            .into(),
    });

    script.push(ContentBlock::SectionHeader {
        title: "Certifications".into(),
    });
    script.push(ContentBlock::BulletList {
        items: vec![
            BulletItem::linked(
                "Dicoding Back-End Developer Expert with JavaScript",
                "https://www.dicoding.com/certificates/98XWE7QL4XM3",
            ),
            BulletItem::linked("EF SET English Certificate", "https://cert.efset.org/n5hbbR"),
            BulletItem::linked(
                "Dicoding Kotlin Android Developer Expert",
                "https://www.dicoding.com/certificates/KEXLY7Q94ZG2",
            ),
            BulletItem::linked(
                "Dicoding Cloud dan Gen AI di AWS",
                "https://www.dicoding.com/certificates/81P24460YZOY",
            ),
        ],
    });

    script
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{render_script, PageGeometry};
    use crate::render::PdfCanvas;

    #[test]
    fn test_script_opens_with_name_header() {
        let script = resume_script();
        assert!(matches!(
            script.blocks().first(),
            Some(ContentBlock::NameHeader { .. })
        ));
    }

    #[test]
    fn test_script_has_six_experience_entries() {
        let count = resume_script()
            .blocks()
            .iter()
            .filter(|b| matches!(b, ContentBlock::ExperienceEntry { .. }))
            .count();
        assert_eq!(count, 6);
    }

    #[test]
    fn test_every_certification_carries_a_link() {
        let script = resume_script();
        let certs = script
            .blocks()
            .iter()
            .rev()
            .find_map(|b| match b {
                ContentBlock::BulletList { items } => Some(items),
                _ => None,
            })
            .expect("certifications bullet list present");
        assert!(certs.iter().all(|item| item.link.is_some()));
    }

    #[test]
    fn test_full_resume_renders_to_multipage_pdf() {
        let geometry = PageGeometry::letter();
        let script = resume_script();
        let bytes = render_script(&script, &geometry, PdfCanvas::new(geometry)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert!(
            doc.get_pages().len() >= 2,
            "the full résumé does not fit a single letter page"
        );
    }

    #[test]
    fn test_full_resume_render_is_deterministic() {
        let geometry = PageGeometry::letter();
        let render = || {
            render_script(&resume_script(), &geometry, PdfCanvas::new(geometry)).unwrap()
        };
        assert_eq!(render(), render(), "same script + geometry => identical bytes");
    }
}
