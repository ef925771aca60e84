/// A short text tag and how prominently it should be drawn (1 = faint, 5 = bold).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub weight: u8,
}

impl Skill {
    pub const fn new(name: &'static str, weight: u8) -> Self {
        Self { name, weight }
    }
}

pub static SKILLS: &[Skill] = &[
    // Backend / Core
    Skill::new("Java", 5),
    Skill::new("Spring Boot", 5),
    Skill::new("Microservices", 5),
    Skill::new("RESTful APIs", 5),
    Skill::new("Hibernate", 4),
    Skill::new("J2EE", 3),
    Skill::new("Node.js", 3),
    Skill::new("Express.js", 3),
    Skill::new("FastAPI", 2),
    Skill::new("Python (scripting)", 2),

    // Frontend
    Skill::new("React.js", 4),
    Skill::new("Angular", 3),
    Skill::new("Next.js", 3),
    Skill::new("TypeScript", 4),
    Skill::new("JavaScript (ES6+)", 4),
    Skill::new("Material UI", 3),
    Skill::new("Bootstrap", 2),
    Skill::new("Responsive Web Design", 3),
    Skill::new("WCAG Accessibility", 2),
    Skill::new("HTML5", 3),
    Skill::new("CSS3", 3),

    // APIs & Security
    Skill::new("GraphQL", 3),
    Skill::new("OAuth2", 4),
    Skill::new("JWT", 4),
    Skill::new("RBAC", 3),
    Skill::new("Swagger", 3),
    Skill::new("Postman", 3),
    Skill::new("API Gateway Security", 3),

    // Cloud & DevOps
    Skill::new("AWS", 5),
    Skill::new("EC2", 4),
    Skill::new("Lambda", 4),
    Skill::new("ECS", 3),
    Skill::new("RDS", 4),
    Skill::new("S3", 4),
    Skill::new("CloudFormation", 3),
    Skill::new("API Gateway", 3),
    Skill::new("Azure", 3),
    Skill::new("Docker", 4),
    Skill::new("Kubernetes", 4),
    Skill::new("Terraform", 3),
    Skill::new("GitHub Actions", 3),
    Skill::new("Jenkins", 3),
    Skill::new("GitLab CI/CD", 2),

    // Databases & Data
    Skill::new("PostgreSQL", 4),
    Skill::new("MySQL", 3),
    Skill::new("Oracle", 3),
    Skill::new("MongoDB", 3),
    Skill::new("Redis", 3),
    Skill::new("SQL Server", 2),
    Skill::new("Data Modeling", 3),
    Skill::new("Query Optimization", 4),
    Skill::new("Caching Strategies", 3),

    // Testing & QA
    Skill::new("JUnit", 4),
    Skill::new("Mockito", 3),
    Skill::new("Selenium", 2),
    Skill::new("Cypress", 2),
    Skill::new("Load Testing", 2),
    Skill::new("Code Coverage", 2),
    Skill::new("TDD/BDD", 3),

    // Observability
    Skill::new("Prometheus", 3),
    Skill::new("Grafana", 3),
    Skill::new("ELK Stack", 3),
    Skill::new("Splunk", 2),
    Skill::new("APM", 3),
    Skill::new("Log Management", 3),

    // Collaboration
    Skill::new("Agile (Scrum/Kanban)", 3),
    Skill::new("JIRA", 3),
    Skill::new("Confluence", 2),
    Skill::new("Sprint Planning", 2),
    Skill::new("Code Reviews", 3),
];

/// Catalog ordered by descending weight. The sort is stable, so skills of equal
/// weight keep their catalog order.
pub fn sorted_by_weight(catalog: &[Skill]) -> Vec<Skill> {
    let mut sorted = catalog.to_vec();
    sorted.sort_by(|a, b| b.weight.cmp(&a.weight));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_entries_are_well_formed() {
        assert_eq!(SKILLS.len(), 70);
        let mut seen = HashSet::new();
        for skill in SKILLS {
            assert!(!skill.name.is_empty());
            assert!((1..=5).contains(&skill.weight), "{} has weight {}", skill.name, skill.weight);
            assert!(seen.insert(skill.name), "duplicate skill {}", skill.name);
        }
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let sorted = sorted_by_weight(SKILLS);
        assert_eq!(sorted.len(), SKILLS.len());
        for pair in sorted.windows(2) {
            assert!(pair[0].weight >= pair[1].weight);
            if pair[0].weight == pair[1].weight {
                let a = SKILLS.iter().position(|s| s.name == pair[0].name);
                let b = SKILLS.iter().position(|s| s.name == pair[1].name);
                assert!(a < b, "{} should precede {}", pair[0].name, pair[1].name);
            }
        }
        let top: Vec<_> = sorted.iter().take(5).map(|s| s.name).collect();
        assert_eq!(top, ["Java", "Spring Boot", "Microservices", "RESTful APIs", "AWS"]);
    }
}
