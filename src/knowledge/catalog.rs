//! The curated career knowledge tables.

use super::{
    ChallengeAdvice, ChallengeKind, DocumentKind, IndustryInsight, KnowledgeBase, Leader, Resource,
    ResourceCategory,
};
use crate::context::CareerStage;
use std::collections::HashMap;

pub(super) fn build() -> KnowledgeBase {
    KnowledgeBase {
        resources: career_resources(),
        industries: industry_insights(),
        transitions: career_transitions(),
        challenges: career_challenges(),
        documents: career_documents(),
        leaders: inspiring_leaders(),
    }
}

fn resource(name: &'static str, description: &'static str, kind: &'static str) -> Resource {
    Resource {
        name,
        description,
        kind,
    }
}

fn career_resources() -> HashMap<CareerStage, HashMap<ResourceCategory, Vec<Resource>>> {
    let starter = HashMap::from([
        (
            ResourceCategory::Networking,
            vec![
                resource(
                    "LinkedIn Learning - Networking Strategies",
                    "Learn effective networking techniques for early-career professionals",
                    "course",
                ),
                resource(
                    "Women in Tech Global Network",
                    "A global community supporting women entering technology fields",
                    "community",
                ),
                resource(
                    "LeanIn Circles",
                    "Peer mentoring groups focused on supporting women in various career stages",
                    "community",
                ),
            ],
        ),
        (
            ResourceCategory::SkillBuilding,
            vec![
                resource(
                    "Coursera",
                    "Free and paid courses on in-demand skills across industries",
                    "platform",
                ),
                resource(
                    "Skillshare",
                    "Creative and business skills with a focus on practical applications",
                    "platform",
                ),
                resource(
                    "HackerRank",
                    "Technical skill practice for those pursuing tech careers",
                    "practice",
                ),
            ],
        ),
        (
            ResourceCategory::JobSearch,
            vec![
                resource(
                    "Indeed",
                    "Comprehensive job search platform with entry-level options",
                    "platform",
                ),
                resource(
                    "Glassdoor",
                    "Job listings with company reviews and salary information",
                    "platform",
                ),
                resource(
                    "Handshake",
                    "Platform connecting students and recent graduates with employers",
                    "platform",
                ),
            ],
        ),
    ]);

    let restarter = HashMap::from([
        (
            ResourceCategory::Networking,
            vec![
                resource(
                    "Women Returners Network",
                    "Specialized network for women returning to work after career breaks",
                    "community",
                ),
                resource(
                    "iRelaunch",
                    "Resources and events specifically for career relaunchers",
                    "platform",
                ),
                resource(
                    "Mom Project",
                    "Platform connecting women with flexible work opportunities after breaks",
                    "platform",
                ),
            ],
        ),
        (
            ResourceCategory::SkillBuilding,
            vec![
                resource(
                    "Google Digital Garage",
                    "Free digital skills courses to update tech knowledge",
                    "platform",
                ),
                resource(
                    "LinkedIn Learning - Returning to Work",
                    "Courses focused on skills and confidence for career returners",
                    "course",
                ),
                resource(
                    "Path Forward",
                    "Return-to-work programs and resources",
                    "program",
                ),
            ],
        ),
        (
            ResourceCategory::JobSearch,
            vec![
                resource(
                    "FlexJobs",
                    "Curated flexible, remote, and part-time job opportunities",
                    "platform",
                ),
                resource(
                    "PowerToFly",
                    "Job platform connecting women with companies committed to diversity",
                    "platform",
                ),
                resource(
                    "Après",
                    "Job marketplace specifically for women returning to the workforce",
                    "platform",
                ),
            ],
        ),
    ]);

    let riser = HashMap::from([
        (
            ResourceCategory::Networking,
            vec![
                resource(
                    "Ellevate Network",
                    "Professional network for women leaders at all levels",
                    "community",
                ),
                resource(
                    "Chief",
                    "Private network designed for women executives",
                    "community",
                ),
                resource(
                    "Athena Alliance",
                    "Community preparing women for board positions and executive leadership",
                    "community",
                ),
            ],
        ),
        (
            ResourceCategory::SkillBuilding,
            vec![
                resource(
                    "Harvard Business School Online",
                    "Advanced business and leadership courses from top institutions",
                    "platform",
                ),
                resource(
                    "MasterClass",
                    "Leadership and business courses taught by industry leaders",
                    "platform",
                ),
                resource(
                    "edX Executive Education",
                    "Executive-level courses from leading universities",
                    "platform",
                ),
            ],
        ),
        (
            ResourceCategory::Leadership,
            vec![
                resource(
                    "Women's Leadership Forum",
                    "Events and resources for women in leadership positions",
                    "community",
                ),
                resource(
                    "Harvard Business Review",
                    "Research-based articles on leadership and management",
                    "resource",
                ),
                resource(
                    "Fast Company Women's Leadership",
                    "Articles and insights on women's leadership challenges and opportunities",
                    "resource",
                ),
            ],
        ),
    ]);

    HashMap::from([
        (CareerStage::Starter, starter),
        (CareerStage::Restarter, restarter),
        (CareerStage::Riser, riser),
    ])
}

fn industry_insights() -> Vec<(&'static str, IndustryInsight)> {
    vec![
        (
            "technology",
            IndustryInsight {
                trends: vec![
                    "AI and machine learning continue to transform roles across the tech industry",
                    "Remote work has become permanently established in most tech companies",
                    "Increased focus on cybersecurity skills across all tech roles",
                    "Growing importance of data analytics capabilities",
                ],
                challenges_for_women: vec![
                    "Gender gap in technical roles, particularly in engineering and leadership",
                    "Work-life balance in an industry known for intense work schedules",
                    "Building confidence in male-dominated environments",
                    "Finding supportive mentors and sponsors",
                ],
                opportunities: vec![
                    "Strong demand for diverse perspectives in product development",
                    "Growing number of women-focused tech communities and scholarships",
                    "Flexible work arrangements becoming more common",
                    "Expanding technical roles in traditionally non-technical industries",
                ],
            },
        ),
        (
            "healthcare",
            IndustryInsight {
                trends: vec![
                    "Telehealth expansion creating new roles and skills needs",
                    "Growing intersection of healthcare and technology",
                    "Increasing focus on preventative care and wellness",
                    "Rising importance of data privacy and security knowledge",
                ],
                challenges_for_women: vec![
                    "Gender gaps in leadership despite women forming majority of workforce",
                    "Managing demanding schedules with personal responsibilities",
                    "Navigating specialized career paths while balancing life commitments",
                    "Addressing compensation disparities in specialized roles",
                ],
                opportunities: vec![
                    "Expanding roles in health technology and informatics",
                    "Growing demand for healthcare management and administration",
                    "Increased recognition of the value of emotional intelligence in patient care",
                    "New specializations emerging at the intersection of healthcare and other fields",
                ],
            },
        ),
        (
            "finance",
            IndustryInsight {
                trends: vec![
                    "Fintech innovation creating new career paths",
                    "Increasing importance of data analysis skills",
                    "Growing focus on ESG (Environmental, Social, Governance) expertise",
                    "Automation changing the nature of traditional finance roles",
                ],
                challenges_for_women: vec![
                    "Persistent underrepresentation in senior leadership",
                    "Navigating historically male-dominated culture",
                    "Balancing demanding workloads with personal responsibilities",
                    "Building confidence in high-pressure environments",
                ],
                opportunities: vec![
                    "Expanding roles in sustainable and ethical finance",
                    "Growing demand for financial technology expertise",
                    "Increasing focus on diverse perspectives in investment decisions",
                    "Rising importance of client relationship skills as technical tasks automate",
                ],
            },
        ),
        (
            "education",
            IndustryInsight {
                trends: vec![
                    "Expanding EdTech sector creating new career paths",
                    "Growing demand for digital teaching skills",
                    "Increasing focus on personalized learning approaches",
                    "Rising importance of social-emotional learning expertise",
                ],
                challenges_for_women: vec![
                    "Gender gaps in educational leadership despite female-dominated profession",
                    "Balancing demanding workloads with personal responsibilities",
                    "Addressing compensation concerns in traditionally undervalued profession",
                    "Navigating complex institutional structures for career advancement",
                ],
                opportunities: vec![
                    "Expanding roles in educational technology and curriculum design",
                    "Growing focus on specialized instructional approaches",
                    "Increasing value placed on social-emotional teaching skills",
                    "New career paths in corporate learning and development",
                ],
            },
        ),
        (
            "creative",
            IndustryInsight {
                trends: vec![
                    "Digital transformation creating new types of creative roles",
                    "Growing importance of multi-platform content creation skills",
                    "Increasing client demand for data-informed creative work",
                    "Rising opportunities in virtual and augmented reality",
                ],
                challenges_for_women: vec![
                    "Navigating subjective feedback and recognition",
                    "Building sustainable freelance or entrepreneurial practices",
                    "Balancing creative integrity with market demands",
                    "Finding mentorship in diverse creative fields",
                ],
                opportunities: vec![
                    "Expanding roles at the intersection of creativity and technology",
                    "Growing demand for authentic, diverse perspectives",
                    "Increasing options for remote and flexible creative work",
                    "Rising value of creative problem-solving in non-traditional industries",
                ],
            },
        ),
    ]
}

fn career_transitions() -> HashMap<(CareerStage, CareerStage), Vec<&'static str>> {
    HashMap::from([
        (
            (CareerStage::Starter, CareerStage::Riser),
            vec![
                "Seek opportunities to lead small projects or task forces",
                "Build expertise in a specific area to become a go-to resource",
                "Develop mentoring relationships with more senior colleagues",
                "Begin building your personal brand through thought leadership",
                "Take on stretch assignments that test your leadership capabilities",
            ],
        ),
        (
            (CareerStage::Restarter, CareerStage::Riser),
            vec![
                "Leverage unique perspectives gained during your career break",
                "Connect your previous experience to current industry challenges",
                "Seek opportunities to demonstrate leadership early in your return",
                "Build a strategic network across different departments",
                "Identify and fill knowledge gaps through targeted learning",
            ],
        ),
    ])
}

fn career_challenges() -> HashMap<ChallengeKind, ChallengeAdvice> {
    HashMap::from([
        (
            ChallengeKind::ImposterSyndrome,
            ChallengeAdvice {
                description:
                    "Feeling like you don't deserve your accomplishments and might be 'found out'",
                strategies: vec![
                    "Document your achievements and review them regularly",
                    "Recognize that imposter feelings are common among high-achievers",
                    "Focus on the value you provide rather than on being 'perfect'",
                    "Seek feedback regularly to gain objective perspective on your work",
                    "Find a supportive community where you can discuss these feelings",
                ],
            },
        ),
        (
            ChallengeKind::WorkLifeBalance,
            ChallengeAdvice {
                description:
                    "Struggling to maintain boundaries between professional and personal life",
                strategies: vec![
                    "Set clear boundaries around working hours and communication",
                    "Practice prioritization based on both impact and urgency",
                    "Build in regular 'recovery' time to prevent burnout",
                    "Use technology tools to automate routine tasks",
                    "Negotiate flexibility where possible to accommodate life needs",
                ],
            },
        ),
        (
            ChallengeKind::SalaryNegotiation,
            ChallengeAdvice {
                description: "Difficulty advocating for fair compensation and benefits",
                strategies: vec![
                    "Research industry standards for your role, experience, and location",
                    "Document your contributions and their business impact",
                    "Practice negotiation conversations with trusted colleagues",
                    "Consider the full compensation package, not just base salary",
                    "Approach as collaborative problem-solving rather than confrontation",
                ],
            },
        ),
        (
            ChallengeKind::CareerPivot,
            ChallengeAdvice {
                description:
                    "Changing to a new industry or role type while leveraging existing skills",
                strategies: vec![
                    "Identify transferable skills relevant to your target field",
                    "Conduct informational interviews with people in your target roles",
                    "Develop bridge experiences through volunteering or side projects",
                    "Create a narrative that connects your past experience to future goals",
                    "Consider specialized courses or certifications to build credibility",
                ],
            },
        ),
        (
            ChallengeKind::Visibility,
            ChallengeAdvice {
                description:
                    "Ensuring your contributions are recognized, especially in remote environments",
                strategies: vec![
                    "Document and share wins and progress with key stakeholders",
                    "Seek speaking opportunities in meetings and professional events",
                    "Develop thought leadership through writing or presentations",
                    "Build relationships with leaders outside your immediate team",
                    "Find sponsors who will advocate for you when you're not in the room",
                ],
            },
        ),
        (
            ChallengeKind::ManagingUp,
            ChallengeAdvice {
                description: "Effectively communicating with and supporting your manager",
                strategies: vec![
                    "Understand your manager's priorities, preferences and communication style",
                    "Provide solutions, not just problems when raising issues",
                    "Proactively share progress and ask for feedback",
                    "Help your manager look good to their leadership",
                    "Learn to frame requests in terms of business outcomes",
                ],
            },
        ),
    ])
}

fn career_documents() -> HashMap<DocumentKind, Vec<&'static str>> {
    HashMap::from([
        (
            DocumentKind::Resume,
            vec![
                "Focus on achievements and impact rather than just responsibilities",
                "Quantify results wherever possible (percentages, metrics, etc.)",
                "Tailor your resume for each significant application",
                "Use strong action verbs to begin bullet points",
                "Include relevant keywords from the job description",
                "Ensure a clean, consistent formatting throughout",
                "Keep to 1-2 pages maximum depending on experience level",
            ],
        ),
        (
            DocumentKind::CoverLetter,
            vec![
                "Address a specific person whenever possible",
                "Show how your experience directly relates to their needs",
                "Demonstrate knowledge of the company and its challenges",
                "Tell a compelling story about why you're the right fit",
                "Keep it concise - typically under one page",
                "End with a clear call to action",
            ],
        ),
        (
            DocumentKind::Interview,
            vec![
                "Research the company, its products, culture, and recent news",
                "Prepare specific examples using the STAR method (Situation, Task, Action, Result)",
                "Practice answering common questions aloud",
                "Prepare thoughtful questions that demonstrate your interest",
                "Plan your interview outfit and logistics in advance",
                "Follow up with a thank-you note highlighting key discussion points",
            ],
        ),
        (
            DocumentKind::SalaryNegotiation,
            vec![
                "Research typical compensation ranges before discussions",
                "Consider the full package (benefits, flexibility, growth opportunities)",
                "Practice your negotiation language to sound confident",
                "Focus on your value to the company, not personal needs",
                "Be prepared with specific achievements that justify your ask",
                "Consider multiple negotiation scenarios and your responses",
            ],
        ),
    ])
}

fn inspiring_leaders() -> Vec<(&'static str, Vec<Leader>)> {
    vec![
        (
            "technology",
            vec![
                Leader {
                    name: "Reshma Saujani",
                    role: "Founder of Girls Who Code",
                    known_for:
                        "Addressing the gender gap in technology through education and advocacy",
                },
                Leader {
                    name: "Whitney Wolfe Herd",
                    role: "Founder and CEO of Bumble",
                    known_for: "Creating a women-centric social connection platform and becoming \
                                the youngest female CEO to take a company public",
                },
                Leader {
                    name: "Fei-Fei Li",
                    role: "Professor and Co-Director of Stanford's Human-Centered AI Institute",
                    known_for:
                        "Pioneering work in AI and computer vision, and advocacy for inclusive AI",
                },
            ],
        ),
        (
            "business",
            vec![
                Leader {
                    name: "Indra Nooyi",
                    role: "Former CEO of PepsiCo",
                    known_for: "Strategic transformation of PepsiCo and advocacy for sustainable \
                                business practices",
                },
                Leader {
                    name: "Sara Blakely",
                    role: "Founder of Spanx",
                    known_for: "Building a billion-dollar company from scratch and her commitment \
                                to supporting women entrepreneurs",
                },
                Leader {
                    name: "Ursula Burns",
                    role: "Former CEO of Xerox",
                    known_for: "First Black woman to serve as CEO of a Fortune 500 company and \
                                leadership in digital transformation",
                },
            ],
        ),
        (
            "science",
            vec![
                Leader {
                    name: "Jennifer Doudna",
                    role: "Biochemist and Nobel Prize Winner",
                    known_for: "Co-invention of CRISPR gene editing technology",
                },
                Leader {
                    name: "Jane Goodall",
                    role: "Primatologist and Anthropologist",
                    known_for:
                        "Groundbreaking research on chimpanzees and environmental conservation",
                },
                Leader {
                    name: "Frances Arnold",
                    role: "Chemical Engineer and Nobel Prize Winner",
                    known_for: "Pioneering 'directed evolution' to create enzymes for \
                                environmentally-friendly chemical products",
                },
            ],
        ),
    ]
}
