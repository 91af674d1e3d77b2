//! The standard stakeholder engagement coach question bank.

use readiness_types::{
    AnswerKind, Category, Question, QuestionBank, ScaleDescriptor, SectionInfo,
};

/// Narrative shown with every result.
pub const INSIGHTS: [&str; 3] = [
    "Your strong interpersonal motivation positions you well for stakeholder coaching",
    "Consider developing deeper knowledge in conflict resolution techniques",
    "Your communication skills form a solid foundation for this career path",
];

pub const NEXT_STEPS: [&str; 3] = [
    "Complete stakeholder management certification",
    "Practice facilitation skills through volunteer opportunities",
    "Shadow experienced stakeholder engagement professionals",
];

pub const ALTERNATIVE_PATHS: [&str; 3] = [
    "Communication Specialist",
    "Project Coordinator",
    "Client Success Manager",
];

fn scale(
    id: &str,
    text: &str,
    scale: ScaleDescriptor,
    category: Category,
    subcategory: &str,
    weight: f64,
) -> Question {
    Question::new(id, text, AnswerKind::Scale(scale), category, subcategory).with_weight(weight)
}

fn choice<const N: usize>(
    id: &str,
    text: &str,
    options: [&str; N],
    category: Category,
    subcategory: &str,
    weight: f64,
) -> Question {
    Question::new(
        id,
        text,
        AnswerKind::single_choice(options),
        category,
        subcategory,
    )
    .with_weight(weight)
}

fn scenario<const N: usize>(
    id: &str,
    text: &str,
    narrative: &str,
    options: [&str; N],
    category: Category,
    subcategory: &str,
    weight: f64,
) -> Question {
    Question::new(
        id,
        text,
        AnswerKind::scenario(narrative, options),
        category,
        subcategory,
    )
    .with_weight(weight)
}

/// Build the "Should I become a stakeholder engagement coach?" assessment.
pub fn stakeholder_coaching() -> QuestionBank {
    use Category::{Psychometric, Technical, Wiscar};

    let questions = vec![
        // Personality & motivation
        scale(
            "psych_01",
            "I genuinely enjoy helping others solve complex interpersonal problems.",
            ScaleDescriptor::agreement(),
            Psychometric,
            "motivation",
            1.2,
        ),
        scale(
            "psych_02",
            "I feel energized when facilitating discussions between different stakeholder groups.",
            ScaleDescriptor::agreement(),
            Psychometric,
            "interest",
            1.0,
        ),
        choice(
            "psych_03",
            "When facing conflict, I prefer to:",
            [
                "Address it directly and find common ground",
                "Listen to all parties and mediate solutions",
                "Avoid confrontation and let others handle it",
                "Focus on facts and logical resolution",
            ],
            Psychometric,
            "personality",
            1.1,
        ),
        scale(
            "psych_04",
            "I am comfortable being the person others turn to for relationship advice.",
            ScaleDescriptor::agreement(),
            Psychometric,
            "personality",
            1.0,
        ),
        choice(
            "psych_05",
            "What motivates you most in your career?",
            [
                "Making a meaningful impact on people and organizations",
                "Financial security and career advancement",
                "Recognition and professional status",
                "Personal growth and continuous learning",
            ],
            Psychometric,
            "motivation",
            1.3,
        ),
        // Technical knowledge & aptitude
        choice(
            "tech_01",
            "A primary stakeholder is someone who:",
            [
                "Has the most authority in the organization",
                "Is directly affected by project outcomes",
                "Provides the most funding",
                "Makes the final decisions",
            ],
            Technical,
            "knowledge",
            1.0,
        ),
        choice(
            "tech_02",
            "In active listening, the most important skill is:",
            [
                "Asking clarifying questions",
                "Providing immediate solutions",
                "Reflecting back what you heard",
                "Taking detailed notes",
            ],
            Technical,
            "communication",
            1.1,
        ),
        scenario(
            "tech_03",
            "You notice two team members have conflicting priorities that affect project delivery. \
             Your first step would be:",
            "Two senior team members, Sarah and Mike, have been assigned to the same project but \
             have different approaches. Sarah wants to prioritize client feedback sessions, while \
             Mike insists on technical testing first. Their disagreement is causing delays.",
            [
                "Schedule a meeting with both to understand their perspectives",
                "Make a decision based on project timeline priorities",
                "Escalate to senior management immediately",
                "Suggest they work on separate project components",
            ],
            Technical,
            "conflict-resolution",
            1.2,
        ),
        choice(
            "tech_04",
            "The most effective way to build stakeholder buy-in is through:",
            [
                "Clear communication of benefits and addressing concerns",
                "Authority and formal mandate",
                "Financial incentives",
                "Peer pressure and social proof",
            ],
            Technical,
            "engagement",
            1.1,
        ),
        // WISCAR
        scale(
            "wiscar_will_01",
            "I am willing to invest significant time learning stakeholder management frameworks.",
            ScaleDescriptor::agreement(),
            Wiscar,
            "will",
            1.0,
        ),
        scale(
            "wiscar_interest_01",
            "I find organizational dynamics and relationship patterns fascinating.",
            ScaleDescriptor::agreement(),
            Wiscar,
            "interest",
            1.0,
        ),
        scale(
            "wiscar_skill_01",
            "Rate your current ability to facilitate productive conversations between \
             conflicting parties:",
            ScaleDescriptor::five_point(["Poor", "Below Average", "Average", "Good", "Excellent"]),
            Wiscar,
            "skill",
            1.1,
        ),
        scenario(
            "wiscar_cognitive_01",
            "A client wants to rush a project launch, but your team needs more time for quality \
             assurance. The client threatens to find another vendor. How do you approach this?",
            "Your biggest client is pushing for an early launch date that would compromise \
             quality. They're frustrated and mentioned considering other vendors.",
            [
                "Present data-driven risks and propose alternative timelines with incremental deliverables",
                "Agree to the timeline and work overtime to meet demands",
                "Stand firm on quality requirements regardless of client reaction",
                "Offer significant discounts to compensate for the rushed timeline",
            ],
            Wiscar,
            "cognitive",
            1.2,
        ),
        choice(
            "wiscar_ability_01",
            "When receiving constructive feedback about my interpersonal style, I:",
            [
                "Welcome it and actively seek specific examples for improvement",
                "Listen politely but privately question its validity",
                "Feel defensive but try to consider the points raised",
                "Prefer to focus on my strengths rather than weaknesses",
            ],
            Wiscar,
            "ability",
            1.1,
        ),
        scale(
            "wiscar_real_01",
            "How comfortable would you be spending 60-70% of your time in meetings and \
             conversations rather than independent work?",
            ScaleDescriptor::five_point([
                "Very Uncomfortable",
                "Uncomfortable",
                "Neutral",
                "Comfortable",
                "Very Comfortable",
            ]),
            Wiscar,
            "realWorld",
            1.0,
        ),
    ];

    QuestionBank::new(questions)
        .with_prelude(
            "Should I Become a Stakeholder Engagement Coach?\n\
             Discover your suitability for a career in stakeholder engagement. \
             The assessment takes about 20-25 minutes.",
        )
        .with_epilogue("Comprehensive analysis of your fit for stakeholder engagement coaching")
        .with_section_info(
            Psychometric,
            SectionInfo::new(
                "Personality & Motivation Assessment",
                "Understanding your natural tendencies and what drives you",
                "8-10 minutes",
            ),
        )
        .with_section_info(
            Technical,
            SectionInfo::new(
                "Technical Knowledge & Aptitude",
                "Testing your understanding of stakeholder engagement principles",
                "6-8 minutes",
            ),
        )
        .with_section_info(
            Wiscar,
            SectionInfo::new(
                "WISCAR Framework Analysis",
                "Comprehensive readiness evaluation across six key dimensions",
                "8-10 minutes",
            ),
        )
}
