//! Lays out a sample résumé in both layouts.
//!
//! ```text
//! cargo run --example resume -- <regular.ttf> <bold.ttf> [symbol.ttf]
//! ```
//!
//! Writes `resume_example.pdf`, and `resume_example_fancy.pdf` when a symbol font
//! (with phone, envelope and pin pictographs, e.g. Symbola) is given.

use chrono::NaiveDate;
use indexmap::IndexMap;
use resume_gen::{
    Author, Bullet, Certification, ContentBlock, Education, FancyResume, FancyStyle, FontFace,
    LayoutConfig, MainSection, PdfCanvas, Resume, ResumeGenerator, Section, WorkExperience,
};

fn date(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("valid date")
}

fn bullets(lines: &[&str]) -> Vec<Bullet> {
    lines.iter().copied().map(Bullet::parse).collect()
}

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample() -> Resume {
    let mut skills = IndexMap::new();
    skills.insert(
        "Languages".to_string(),
        list(&["Java", "Python", "JavaScript", "TypeScript", "SQL", "C++"]),
    );
    skills.insert(
        "Frameworks/Libraries".to_string(),
        list(&["React", "Angular", "Node.js", "Spring Boot", "Django"]),
    );
    skills.insert(
        "Tools".to_string(),
        list(&["Git", "Docker", "Kubernetes", "Jenkins", "JIRA", "AWS"]),
    );
    skills.insert(
        "Databases".to_string(),
        list(&["MySQL", "PostgreSQL", "MongoDB", "Redis"]),
    );
    skills.insert(
        "Methodologies".to_string(),
        list(&["Agile", "Scrum", "TDD (Test-Driven Development)"]),
    );

    let mut custom_sections = IndexMap::new();
    custom_sections.insert(
        "PROJECTS".to_string(),
        vec![
            ContentBlock::new("Project Management Tool").with_description([
                "Developed a web-based project management tool using React, Node.js, and \
                 MongoDB, enabling teams to track progress, manage tasks, and collaborate \
                 effectively.",
                "Implemented role-based access control and real-time notifications using \
                 WebSockets.",
            ]),
            ContentBlock::new("E-commerce Platform").with_description([
                "Designed and built an e-commerce platform using Angular and Spring Boot, \
                 featuring a responsive UI, secure payment gateway integration, and order \
                 management system.",
                "\tOptimized the platform for high traffic by implementing lazy loading and \
                 code splitting.",
            ]),
        ],
    );
    custom_sections.insert(
        "VOLUNTEER EXPERIENCE".to_string(),
        vec![ContentBlock::new("Code Mentor")
            .with_subtitle("Non-Profit Coding Organization")
            .with_dates(date(2018, 6), None)
            .with_description([
                "Provided mentorship to aspiring software developers, conducting workshops \
                 on web development, data structures, and algorithms.",
                "Assisted mentees with coding challenges, career advice, and \
                 [resume building](https://example.com/resumes).",
            ])],
    );

    Resume {
        author: Author {
            name: "John Doe".to_string(),
            title: "Software Engineer".to_string(),
            phone: "(123) 456-7890".to_string(),
            email: "johnnydoe@gmail.com".to_string(),
            address: "1234 Elm Street, Apt 56, Some City, ST 12345".to_string(),
        },
        pitch: "Innovative and detail-oriented software engineer with 5+ years of experience \
                in designing, developing, and maintaining software applications. Proven \
                expertise in full-stack development, agile methodologies, and team \
                collaboration."
            .to_string(),
        skills,
        experience: vec![
            WorkExperience {
                company: "ABC Tech Solutions".to_string(),
                job_title: "Senior Software Engineer".to_string(),
                location: Some("Some City, TX".to_string()),
                start: date(2022, 3),
                end: None,
                description: bullets(&[
                    "Led the migration of legacy systems to modern cloud-based architectures \
                     on AWS, reducing operational costs by 20%.",
                    "Mentored junior developers, conducting code reviews and providing \
                     guidance on best practices.",
                ]),
            },
            WorkExperience {
                company: "ABC Tech Solutions".to_string(),
                job_title: "Software Engineer".to_string(),
                location: Some("Some City, TX".to_string()),
                start: date(2020, 1),
                end: Some(date(2022, 3)),
                description: bullets(&[
                    "Designed and developed scalable web applications using React, Node.js, \
                     and MongoDB, enhancing user experience and application performance.",
                    "Implemented CI/CD pipelines using Jenkins and Docker.",
                    "\tCut deployment time from hours to minutes.",
                ]),
            },
            WorkExperience {
                company: "XYZ Innovations".to_string(),
                job_title: "Full Stack Developer".to_string(),
                location: Some("Another City, TX".to_string()),
                start: date(2016, 6),
                end: Some(date(2019, 12)),
                description: bullets(&[
                    "Developed and maintained web applications using Angular, Spring Boot, \
                     and PostgreSQL, contributing to a 30% increase in user engagement.",
                    "Created RESTful APIs to support front-end functionality.",
                ]),
            },
        ],
        custom_sections,
        certifications: vec![
            Certification {
                name: "AWS Certified Solutions Architect - Associate".to_string(),
                date: date(2023, 9),
            },
            Certification {
                name: "Certified ScrumMaster (CSM)".to_string(),
                date: date(2021, 4),
            },
        ],
        education: vec![
            Education {
                school: Some("Northern University of Technology".to_string()),
                course: Some("Master of Science in Computer Science".to_string()),
                location: "Techville, TX".to_string(),
                gpa: Some(3.9),
                start: date(2016, 8),
                end: Some(date(2018, 5)),
                description: Vec::new(),
            },
            Education {
                school: Some("Western Institute of Technology".to_string()),
                course: Some("Bachelor of Science in Computer Science".to_string()),
                location: "Innovate City, CA".to_string(),
                gpa: Some(3.7),
                start: date(2012, 8),
                end: Some(date(2016, 5)),
                description: Vec::new(),
            },
        ],
        courses: Vec::new(),
    }
}

fn canvas(config: &LayoutConfig, fonts: &[String]) -> PdfCanvas {
    let mut canvas = PdfCanvas::new(config.page_size, config.margins);
    let faces = [FontFace::Regular, FontFace::Bold, FontFace::Symbol];
    for (face, path) in faces.into_iter().zip(fonts) {
        canvas
            .register_font(face, path)
            .unwrap_or_else(|e| panic!("can load {face} font from {path}: {e}"));
    }
    canvas
}

fn main() {
    let fonts: Vec<String> = std::env::args().skip(1).collect();
    if fonts.len() < 2 {
        eprintln!("usage: resume <regular.ttf> <bold.ttf> [symbol.ttf]");
        std::process::exit(1);
    }

    let resume = sample();
    let config = LayoutConfig::default();

    let mut generator = ResumeGenerator::new(&resume, canvas(&config, &fonts), &config);
    generator
        .draw(&[
            Section::Author,
            Section::Pitch,
            Section::Skills,
            Section::WorkExperience,
            Section::Certifications,
            Section::Custom("PROJECTS".to_string()),
            Section::Education,
            Section::Courses,
            Section::Custom("VOLUNTEER EXPERIENCE".to_string()),
        ])
        .expect("can lay out resume");
    generator
        .save("resume_example.pdf")
        .expect("can save resume_example.pdf");

    if fonts.len() > 2 {
        let mut fancy = FancyResume::new(
            &resume,
            canvas(&config, &fonts),
            &config,
            FancyStyle::default(),
        );
        fancy
            .draw(&[
                MainSection::WorkExperience,
                MainSection::Custom("PROJECTS".to_string()),
                MainSection::Custom("VOLUNTEER EXPERIENCE".to_string()),
            ])
            .expect("can lay out fancy resume");
        fancy
            .save("resume_example_fancy.pdf")
            .expect("can save resume_example_fancy.pdf");
    }
}
