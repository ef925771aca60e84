use leptos::prelude::*;

use crate::skills::{sorted_by_weight, weight_to_style, SKILLS};

struct Experience {
    role: &'static str,
    company: &'static str,
    location: &'static str,
    dates: &'static str,
    bullets: &'static [&'static str],
}

static EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Software Engineer",
        company: "Assurant",
        location: "USA",
        dates: "Aug 2024 – Present",
        bullets: &[
            "Design and ship Java/Spring Boot microservices powering customer-facing APIs with strong SLAs.",
            "Build and secure REST/GraphQL APIs with proper versioning, validation, and observability.",
            "Deploy workloads to AWS using Docker, ECS/EKS, and IaC patterns for repeatable releases.",
        ],
    },
    Experience {
        role: "Full Stack Developer",
        company: "UMKC",
        location: "MO, USA",
        dates: "Jan 2024 – Jul 2024",
        bullets: &[
            "Delivered React/Node.js applications that automated student request workflows and approvals.",
            "Built reusable UI components and REST endpoints backed by SQL to improve data accuracy.",
        ],
    },
];

struct Education {
    degree: &'static str,
    school: &'static str,
    dates: &'static str,
}

static EDUCATION: &[Education] = &[
    Education {
        degree: "Master of Science in Computer Science",
        school: "University of Missouri–Kansas City",
        dates: "Aug 2022 – May 2024",
    },
    Education {
        degree: "B.Tech in Computer Science and Engineering",
        school: "SRM University, AP",
        dates: "Jul 2018 – May 2022",
    },
];

static PROJECTS: &[(&str, &str)] = &[
    (
        "Streaming Analytics Pipeline",
        "Real-time ingestion with Kafka and Spark streaming, surfacing insights through REST and dashboards.",
    ),
    (
        "Deployment Control Plane",
        "Infrastructure-as-code and GitOps workflows for multi-service deployments with automated checks.",
    ),
    (
        "Customer Insights Dashboard",
        "Full-stack analytics dashboard with role-based access and exportable reports.",
    ),
];

#[component]
fn Section(id: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section id=id class="py-16 lg:py-24">
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold mb-8">{title}</h2>
                {children()}
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <Section id="about" title="About Me">
            <p class="text-base mb-4 leading-relaxed max-w-3xl">
                "Software engineer building backend services in Java and Spring Boot, front ends in React and TypeScript, and the AWS infrastructure that runs them."
            </p>
            <p class="text-base leading-relaxed max-w-3xl">
                "I care about reliable APIs, measurable performance, and code that the next engineer can read."
            </p>
        </Section>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <Section id="skills" title="Skills">
            <div class="flex flex-wrap gap-2">
                {sorted_by_weight(SKILLS)
                    .into_iter()
                    .map(|skill| {
                        let style = weight_to_style(skill.weight);
                        view! {
                            <span
                                class="rounded-md px-2 py-1 bg-brightBlack/30"
                                style=format!("opacity: {}; font-weight: {};", style.opacity, style.font_weight)
                            >
                                {skill.name}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <Section id="experience" title="Experience">
            <div class="space-y-8">
                {EXPERIENCE
                    .iter()
                    .map(|job| {
                        view! {
                            <div class="p-4 rounded-lg border border-muted/30">
                                <h3 class="text-xl font-bold">{job.role}</h3>
                                <p class="text-cyan">
                                    {job.company} " · " {job.location} " · " {job.dates}
                                </p>
                                <ul class="list-disc ml-6 mt-2 space-y-1">
                                    {job.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <Section id="education" title="Education">
            <div class="grid gap-4 md:grid-cols-2">
                {EDUCATION
                    .iter()
                    .map(|ed| {
                        view! {
                            <div class="p-4 rounded-lg border border-muted/30">
                                <h3 class="font-bold">{ed.degree}</h3>
                                <p>{ed.school}</p>
                                <p class="text-sm text-muted">{ed.dates}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <Section id="projects" title="Projects">
            <div class="grid gap-4 md:grid-cols-3">
                {PROJECTS
                    .iter()
                    .map(|&(title, description)| {
                        view! {
                            <div class="p-4 rounded-lg border border-muted/30">
                                <h3 class="font-bold mb-2">{title}</h3>
                                <p class="text-sm">{description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn ResumeSection() -> impl IntoView {
    view! {
        <Section id="resume" title="Resume">
            <p class="mb-4">"Recent experience, education and certifications in one page."</p>
            <a
                href="/resume.pdf"
                download="BabjiKilaruResume.pdf"
                class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
            >
                "Download resume"
            </a>
        </Section>
    }
}
