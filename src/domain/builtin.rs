use crate::domain::model::{
    EducationEntry, ExperienceEntry, ProfileInfo, ProjectEntry, SiteContent, SkillCategory,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl SiteContent {
    /// The portfolio content generated when no content file is given.
    pub fn builtin() -> Self {
        Self {
            profile: builtin_profile(),
            experience: builtin_experience(),
            education: builtin_education(),
            projects: builtin_projects(),
            skills: builtin_skills(),
        }
    }
}

fn builtin_profile() -> ProfileInfo {
    ProfileInfo {
        name: "Sarthak Singh".to_string(),
        subtitle: "Skilled in building scalable and distributed systems. I build LLM‑based RAG \
                   pipelines and tools for automation."
            .to_string(),
        intro: "Hello, my name is Sarthak Singh, and I am a master's in Software Engineering \
                student at the University of Maryland College Park, graduating in December 2025. \
                I am a full‑stack software developer with around four years of experience working \
                as a Software Engineer at IBM India Labs and remotely for Influenced (startup). \
                I bring expertise in Python, Golang, Kubernetes, CI/CD, AWS, SQL/NoSQL databases, \
                Docker and web development (Django, FastAPI, etc). My top skills include system \
                design and data structures. Besides programming, I enjoy sports and outdoor activities."
            .to_string(),
        linkedin_url: "https://www.linkedin.com/in/sarthak-singh3867".to_string(),
        github_url: "https://github.com/Sarthak-kiloray".to_string(),
        // TODO: point at the published article once its DOI link is available.
        research_url: "https://www.sciencedirect.com".to_string(),
        copyright_year: 2025,
    }
}

fn builtin_experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            company: "IBM".to_string(),
            position: "Software Development Engineer II".to_string(),
            duration: "July 2021 – Jan 2024".to_string(),
            location: "Kochi, India".to_string(),
            technologies: strings(&[
                "Python",
                "AWS",
                "Kubernetes",
                "Docker",
                "Jenkins",
                "PostgreSQL",
                "Golang",
            ]),
            highlights: strings(&[
                "Led the migration of data analytics pipelines from ElasticSearch to OpenSearch, \
                 reducing operational costs by up to $3M annually and improving search performance.",
                "Streamlined backend services for API management on IBM Cloud and AWS, optimizing \
                 traffic routing, security, and data processing.",
                "Spearheaded a security optimization project for managing sensitive data, earning \
                 an IBM Quarterly Cash Award.",
            ]),
        },
        ExperienceEntry {
            company: "Influenced".to_string(),
            position: "Full Stack Developer".to_string(),
            duration: "July 2024 – June 2025".to_string(),
            location: "Remote, USA".to_string(),
            technologies: strings(&[
                "Next.js",
                "React",
                "TypeScript",
                "Tailwind CSS",
                "AWS Amplify",
                "Dynamo DB",
            ]),
            highlights: strings(&[
                "Developed an AI‑powered marketplace connecting brands with micro‑influencers, \
                 enabling authentic social proof and massive reach.",
                "Implemented role‑based access and AI‑driven workflows for product listings, \
                 interest expressions, and collaboration management.",
            ]),
        },
        ExperienceEntry {
            company: "Informatica".to_string(),
            position: "Software Engineer Intern".to_string(),
            duration: "Jan 2021 – July 2021".to_string(),
            location: "Bangalore, India".to_string(),
            technologies: strings(&[
                "Python",
                "ETL",
                "Oracle DB",
                "Tableau",
                "Golang",
                "AWS S3",
            ]),
            highlights: strings(&[
                "Resolved over 100 customer support tickets for the Informatica ETL tool, \
                 providing technical guidance and troubleshooting.",
                "Integrated the ETL tool with databases such as PostgreSQL, MySQL and AWS S3.",
                "Led an intern showcase demonstrating how the ETL tool integrates with Tableau to \
                 transform and visualise a COVID dataset.",
            ]),
        },
    ]
}

fn builtin_education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            institution: "University of Maryland, College Park".to_string(),
            degree: "Master of Engineering in Software Engineering".to_string(),
            duration: "Jan 2024 – Dec 2025".to_string(),
            location: "College Park, MD, USA".to_string(),
            gpa: Some("3.52/4.0".to_string()),
            details: strings(&[
                "Teaching Assistant for System Design and Scaling, transformer models, FastAPI and Faiss.",
            ]),
        },
        EducationEntry {
            institution: "Vellore Institute of Technology".to_string(),
            degree: "Bachelor of Technology in Computer Science and Engineering".to_string(),
            duration: "June 2017 – May 2021".to_string(),
            location: "Vellore, India".to_string(),
            gpa: None,
            details: Vec::new(),
        },
    ]
}

fn builtin_projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            name: "RAG Expert Assistant".to_string(),
            description: "A full Retrieval‑Augmented Generation (RAG) system that lets users \
                          upload documents, generate embeddings, store them in a vector database, \
                          and chat with the content using an LLM‑powered assistant. Built with \
                          Python, LangChain, ChromaDB and Gradio, it demonstrates document \
                          ingestion, intelligent text chunking, vector storage and real‑time \
                          context retrieval."
                .to_string(),
            technologies: strings(&["Python", "LangChain", "ChromaDB", "Gradio"]),
            link: "https://github.com/Sarthak-kiloray/Rag-expert-assistant".to_string(),
        },
        ProjectEntry {
            name: "Transformers Lab".to_string(),
            description: "A programming lab exploring the fundamentals of transformer models \
                          using pre‑trained models from the Hugging Face Transformers library. \
                          The project experiments with token prediction, semantic similarity and \
                          visualisation of model outputs to understand how LLMs generate text."
                .to_string(),
            technologies: strings(&["Python", "Hugging Face Transformers"]),
            link: "https://github.com/Sarthak-kiloray/Transformers_lab".to_string(),
        },
        ProjectEntry {
            name: "DigiSchool".to_string(),
            description: "A comprehensive Learning Management System for schools that \
                          streamlines educational processes and enhances collaboration among \
                          students, teachers, administrators and parents. It provides modules for \
                          account management, curriculum management, assessments, performance \
                          tracking, collaboration and certificate generation."
                .to_string(),
            technologies: strings(&["React.js", "Spring Boot", "MySQL"]),
            link: "https://github.com/Sarthak-kiloray/DigiSchool".to_string(),
        },
    ]
}

fn builtin_skills() -> Vec<SkillCategory> {
    let category = |name: &str, items: &[&str]| SkillCategory {
        category: name.to_string(),
        items: strings(items),
    };

    vec![
        category(
            "Programming",
            &[
                "Python",
                "JavaScript",
                "Flask",
                "REST APIs",
                "SQL (PostgreSQL, MySQL)",
                "NoSQL",
                "Redis",
                "Kafka",
                "Django",
            ],
        ),
        category(
            "DevOps & Cloud",
            &[
                "AWS",
                "Docker",
                "Kubernetes (K8s)",
                "ArgoCD",
                "Jenkins",
                "CI/CD pipelines",
                "Terraform",
            ],
        ),
        category(
            "Systems",
            &[
                "Microservices",
                "Distributed Systems",
                "Scaling Systems",
                "Object‑Oriented Design",
                "Unit Testing",
            ],
        ),
        category(
            "Other",
            &[
                "Git/GitHub",
                "Windows",
                "Linux",
                "Data Structures & Algorithms",
                "Communication",
                "Innovation",
            ],
        ),
        category(
            "AI & ML",
            &[
                "Cursor",
                "NLP (transformer models)",
                "LLM (Claude, GPT)",
                "Deep Learning & ML (PyTorch, SGD, scikit‑learn)",
                "Gradio",
            ],
        ),
    ]
}
