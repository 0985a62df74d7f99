use crate::card::CardLike;

/// A course or certification shown in the certificates carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Certificate {
    pub id: u32,
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub description: Option<&'static str>,
    pub image: &'static str,
    /// Public verification link, when the issuer provides one.
    pub credential_url: Option<&'static str>,
}

impl Certificate {
    pub fn is_verifiable(&self) -> bool {
        self.credential_url.is_some()
    }
}

impl CardLike for Certificate {
    fn title(&self) -> &str {
        self.title
    }

    fn subtitle(&self) -> &str {
        self.issuer
    }
}

pub static CERTIFICATES: &[Certificate] = &[
    Certificate {
        id: 1,
        title: "Full Stack Web Development",
        issuer: "Masai School",
        date: "2023",
        description: Some(
            "Intensive full-stack development program covering modern web technologies",
        ),
        image: "/images/certificates/masai-certificate.jpg",
        credential_url: Some("https://example.com/verify"),
    },
    Certificate {
        id: 2,
        title: "React Advanced Patterns",
        issuer: "Online Platform",
        date: "2023",
        description: Some("Advanced React concepts and best practices"),
        image: "/images/certificates/react-certificate.jpg",
        credential_url: None,
    },
    Certificate {
        id: 3,
        title: "JavaScript Mastery",
        issuer: "Coding Academy",
        date: "2022",
        description: Some(
            "Comprehensive JavaScript course covering ES6+ features",
        ),
        image: "/images/certificates/js-certificate.jpg",
        credential_url: Some("https://example.com/verify"),
    },
    Certificate {
        id: 4,
        title: "Node.js Backend Development",
        issuer: "Tech Institute",
        date: "2023",
        description: Some(
            "Building scalable backend applications with Node.js",
        ),
        image: "/images/certificates/nodejs-certificate.jpg",
        credential_url: None,
    },
    Certificate {
        id: 5,
        title: "TypeScript Fundamentals",
        issuer: "Tech Academy",
        date: "2023",
        description: Some("Master TypeScript for modern web development"),
        image: "/images/certificates/typescript-certificate.jpg",
        credential_url: None,
    },
    Certificate {
        id: 6,
        title: "MongoDB Database Design",
        issuer: "Database University",
        date: "2023",
        description: Some("Advanced database design and optimization"),
        image: "/images/certificates/mongodb-certificate.jpg",
        credential_url: None,
    },
    Certificate {
        id: 7,
        title: "AWS Cloud Practitioner",
        issuer: "Amazon Web Services",
        date: "2023",
        description: Some("Cloud infrastructure and services"),
        image: "/images/certificates/aws-certificate.jpg",
        credential_url: None,
    },
    Certificate {
        id: 8,
        title: "Docker & Kubernetes",
        issuer: "DevOps Institute",
        date: "2023",
        description: Some("Containerization and orchestration"),
        image: "/images/certificates/docker-certificate.jpg",
        credential_url: None,
    },
    Certificate {
        id: 9,
        title: "GraphQL API Development",
        issuer: "API Academy",
        date: "2023",
        description: Some("Building efficient GraphQL APIs"),
        image: "/images/certificates/graphql-certificate.jpg",
        credential_url: None,
    },
    Certificate {
        id: 10,
        title: "UI/UX Design Principles",
        issuer: "Design School",
        date: "2022",
        description: Some("User interface and experience design"),
        image: "/images/certificates/design-certificate.jpg",
        credential_url: None,
    },
];

#[cfg(test)]
mod tests {
    use super::CERTIFICATES;

    #[test]
    fn certificate_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = CERTIFICATES.iter().map(|c| c.id).collect();
        let expected: Vec<u32> = (1..=CERTIFICATES.len() as u32).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn only_some_certificates_are_verifiable() {
        let verifiable =
            CERTIFICATES.iter().filter(|c| c.is_verifiable()).count();
        assert_eq!(verifiable, 2);
    }
}
