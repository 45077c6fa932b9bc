//! Bundled sample resume, installed on first run and by the explicit
//! load-sample action so a new user sees a populated preview immediately.

use super::cv::{CvData, Education, Experience, PersonalInfo, Skill, SkillLevel};

pub fn sample_cv() -> CvData {
    CvData {
        personal_info: PersonalInfo {
            name: "Sarah Johnson".to_string(),
            title: "Senior Frontend Developer".to_string(),
            email: "sarah.johnson@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            summary: "Passionate frontend developer with 6+ years of experience building \
                      scalable web applications using React, TypeScript, and modern development \
                      practices. Proven track record of leading cross-functional teams and \
                      delivering high-quality user experiences that drive business growth. \
                      Expertise in performance optimization, accessibility, and responsive design."
                .to_string(),
        },
        experiences: vec![
            Experience {
                id: "1".to_string(),
                position: "Senior Frontend Developer".to_string(),
                company: "TechCorp Solutions".to_string(),
                start_date: "2022-03".to_string(),
                end_date: String::new(),
                is_current_job: true,
                description: "Lead frontend development for enterprise SaaS platform serving \
                              100k+ users. Architected and implemented React-based component \
                              library, reducing development time by 40%. Mentored junior \
                              developers and established best practices for code quality and \
                              testing."
                    .to_string(),
            },
            Experience {
                id: "2".to_string(),
                position: "Frontend Developer".to_string(),
                company: "Digital Innovations Inc".to_string(),
                start_date: "2020-01".to_string(),
                end_date: "2022-02".to_string(),
                is_current_job: false,
                description: "Developed responsive web applications using React, Redux, and \
                              TypeScript. Collaborated with UX/UI designers to implement \
                              pixel-perfect designs. Improved application performance by 60% \
                              through code optimization and lazy loading strategies."
                    .to_string(),
            },
            Experience {
                id: "3".to_string(),
                position: "Junior Web Developer".to_string(),
                company: "StartupHub".to_string(),
                start_date: "2018-06".to_string(),
                end_date: "2019-12".to_string(),
                is_current_job: false,
                description: "Built interactive web interfaces using HTML5, CSS3, and \
                              JavaScript. Worked closely with backend developers to integrate \
                              RESTful APIs. Participated in agile development process and \
                              contributed to product roadmap discussions."
                    .to_string(),
            },
        ],
        education: vec![
            Education {
                id: "1".to_string(),
                degree: "Bachelor of Science in Computer Science".to_string(),
                school: "University of California, Berkeley".to_string(),
                field: "Computer Science".to_string(),
                start_date: "2014-09".to_string(),
                end_date: "2018-05".to_string(),
                gpa: Some("3.8".to_string()),
            },
            Education {
                id: "2".to_string(),
                degree: "Frontend Development Bootcamp".to_string(),
                school: "General Assembly".to_string(),
                field: "Web Development".to_string(),
                start_date: "2018-01".to_string(),
                end_date: "2018-04".to_string(),
                gpa: None,
            },
        ],
        skills: vec![
            skill("1", "React", SkillLevel::Expert),
            skill("2", "TypeScript", SkillLevel::Expert),
            skill("3", "JavaScript", SkillLevel::Expert),
            skill("4", "Next.js", SkillLevel::Advanced),
            skill("5", "Node.js", SkillLevel::Advanced),
            skill("6", "GraphQL", SkillLevel::Advanced),
            skill("7", "AWS", SkillLevel::Intermediate),
            skill("8", "Docker", SkillLevel::Intermediate),
            skill("9", "Python", SkillLevel::Beginner),
            skill("10", "Figma", SkillLevel::Intermediate),
        ],
    }
}

fn skill(id: &str, name: &str, level: SkillLevel) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        level,
    }
}
