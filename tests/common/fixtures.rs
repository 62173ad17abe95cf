use vitae::{
    CoverLetter, CustomField, Document, Education, Experience, Project, Recipient, Resume,
    Section, SkillGroup, SkillList,
};

/// A filled-in resume exercising every section kind.
pub fn sample_resume() -> Resume {
    Resume {
        name: "Jane Doe".into(),
        custom_fields: vec![
            CustomField {
                title: "Email".into(),
                content: "jane.doe@example.com".into(),
                is_link: false,
                hidden: false,
            },
            CustomField {
                title: "Website".into(),
                content: "janedoe.dev".into(),
                is_link: true,
                hidden: false,
            },
            CustomField {
                title: "Phone".into(),
                content: "+1 555 010 0100".into(),
                is_link: false,
                hidden: false,
            },
        ],
        sections: vec![
            Section::Experience {
                title: "Experience".into(),
                entries: vec![
                    Experience {
                        company: "Northwind Analytics".into(),
                        role: "Senior Backend Engineer".into(),
                        start_date: "2021".into(),
                        end_date: "2024".into(),
                        location: Some("Berlin".into()),
                        highlights: vec![
                            "Designed the ingestion pipeline for forty thousand events per second".into(),
                            "Cut p99 query latency from nine hundred to ninety milliseconds".into(),
                        ],
                    },
                    Experience {
                        company: "Contoso".into(),
                        role: "Backend Engineer".into(),
                        start_date: "2018".into(),
                        end_date: "2021".into(),
                        location: None,
                        highlights: vec!["Owned the billing service rewrite".into()],
                    },
                ],
            },
            Section::Education {
                title: "Education".into(),
                entries: vec![Education {
                    institution: "Technical University of Munich".into(),
                    degree: "BSc Computer Science".into(),
                    start_date: "2014".into(),
                    end_date: "2018".into(),
                    location: None,
                    highlights: vec![],
                }],
            },
            Section::Skills {
                title: "Skills".into(),
                list: SkillList::Grouped(vec![
                    SkillGroup {
                        name: "Backend".into(),
                        skills: vec!["Rust".into(), "PostgreSQL".into(), "Kafka".into()],
                    },
                    SkillGroup {
                        name: "Tooling".into(),
                        skills: vec!["Grafana".into(), "Terraform".into()],
                    },
                ]),
            },
            Section::Languages {
                title: "Languages".into(),
                items: vec!["English".into(), "German".into()],
            },
            Section::Projects {
                title: "Projects".into(),
                entries: vec![Project {
                    name: "tracepoint".into(),
                    link: Some("tracepoint.dev".into()),
                    github: Some("github.com/janedoe/tracepoint".into()),
                    description: vec!["Latency budget tracker for service meshes".into()],
                }],
            },
        ],
    }
}

/// A cover letter with every block populated.
pub fn sample_letter() -> CoverLetter {
    CoverLetter {
        name: "Ada Lane".into(),
        address: "12 Harbor Street\nPortland, OR 97209".into(),
        phone: "+1 555 010 0199".into(),
        email: "ada.lane@example.com".into(),
        date: "March 3, 2025".into(),
        recipient: Recipient {
            name: "Sam Rivera".into(),
            company: "Fernwood Labs".into(),
            address: "400 Pine Avenue\nSeattle, WA 98101".into(),
        },
        salutation: "Dear Sam Rivera,".into(),
        opening: "I was thrilled to see the staff engineer opening on your \
                  platform team and believe my seven years of systems work \
                  fit it closely."
            .into(),
        body: vec![
            "At Northwind I led the storage migration that cut costs by a \
             third while doubling write throughput.\n\nBefore that I built \
             the on-call tooling the whole engineering group still uses."
                .into(),
        ],
        closing: "Sincerely,".into(),
        signature: "Ada Lane".into(),
    }
}

pub fn resume_document() -> Document {
    Document::Resume(sample_resume())
}

pub fn letter_document() -> Document {
    Document::CoverLetter(sample_letter())
}
