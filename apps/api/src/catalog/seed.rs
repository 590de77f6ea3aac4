//! Built-in occupation set used when no catalog snapshot exists yet.
//!
//! Order is significant: it becomes the catalog insertion order, which drives
//! `/jobs` listing order and every first-match tie-break.

use crate::catalog::models::{OccupationRecord, TaskSplit};

#[allow(clippy::too_many_arguments)]
fn occupation(
    key: &str,
    title: &str,
    risk_score: f64,
    onet_code: &str,
    automatable: &[&str],
    human_required: &[&str],
    skills: &[&str],
    tech_threats: &[&str],
    skill_vector: [f64; 5],
) -> OccupationRecord {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    OccupationRecord {
        key: key.to_string(),
        title: title.to_string(),
        risk_score,
        onet_code: Some(onet_code.to_string()),
        tasks: TaskSplit {
            automatable: owned(automatable),
            human_required: owned(human_required),
        },
        skills: owned(skills),
        tech_threats: owned(tech_threats),
        skill_vector: skill_vector.to_vec(),
    }
}

/// The 25 seed occupations in catalog order.
pub fn seed_records() -> Vec<OccupationRecord> {
    vec![
        occupation(
            "software_engineer",
            "Software Engineer",
            45.2,
            "15-1252.00",
            &[
                "Write boilerplate code",
                "Debug syntax errors",
                "Write unit tests",
                "Code documentation",
            ],
            &[
                "System architecture",
                "Stakeholder communication",
                "Creative problem solving",
                "Technical leadership",
            ],
            &["Python", "Algorithms", "System Design", "Communication", "Problem Solving"],
            &["GitHub Copilot", "GPT-4", "AutoML platforms", "Cursor AI"],
            [0.8, 0.9, 0.7, 0.6, 0.5],
        ),
        occupation(
            "truck_driver",
            "Truck Driver",
            79.0,
            "53-3032.00",
            &["Highway driving", "Route planning", "Fuel monitoring", "Speed regulation"],
            &[
                "Loading/unloading",
                "Customer interaction",
                "Emergency handling",
                "Complex urban navigation",
            ],
            &[
                "Driving",
                "Navigation",
                "Vehicle Maintenance",
                "Time Management",
                "Safety Awareness",
            ],
            &["Tesla Semi", "Waymo", "TuSimple autonomous trucks", "Aurora Driver"],
            [0.3, 0.2, 0.6, 0.7, 0.4],
        ),
        occupation(
            "registered_nurse",
            "Registered Nurse",
            18.5,
            "29-1141.00",
            &[
                "Vital signs monitoring",
                "Medication scheduling",
                "Basic diagnostics",
                "Record keeping",
            ],
            &[
                "Patient comfort",
                "Family communication",
                "Complex care decisions",
                "Emergency response",
            ],
            &["Patient Care", "Medical Knowledge", "Empathy", "Critical Thinking", "Communication"],
            &["AI diagnostics", "Automated IV systems", "Robot nurses", "Remote monitoring"],
            [0.2, 0.4, 0.9, 0.8, 0.7],
        ),
        occupation(
            "data_analyst",
            "Data Analyst",
            62.3,
            "15-2051.00",
            &["Data cleaning", "Basic visualizations", "Standard reports", "SQL queries"],
            &[
                "Strategic insights",
                "Stakeholder storytelling",
                "Anomaly investigation",
                "Business context",
            ],
            &["SQL", "Python", "Statistics", "Business Acumen", "Communication"],
            &["Power BI Copilot", "AutoML", "GPT-4 Data Analyst", "Tableau AI"],
            [0.7, 0.8, 0.6, 0.5, 0.6],
        ),
        occupation(
            "mental_health_therapist",
            "Mental Health Therapist",
            12.1,
            "21-1014.00",
            &[
                "Appointment scheduling",
                "Session notes",
                "Resource recommendations",
                "Progress tracking",
            ],
            &[
                "Building trust",
                "Reading emotional nuance",
                "Crisis intervention",
                "Therapeutic relationship",
            ],
            &[
                "Active Listening",
                "Empathy",
                "Psychology",
                "Therapy Techniques",
                "Emotional Intelligence",
            ],
            &["Woebot", "Replika", "AI mental health chatbots", "Talkspace AI"],
            [0.1, 0.3, 0.95, 0.9, 0.85],
        ),
        occupation(
            "accountant",
            "Accountant",
            73.8,
            "13-2011.00",
            &[
                "Tax preparation",
                "Bookkeeping",
                "Expense categorization",
                "Payroll processing",
                "Financial statements",
            ],
            &[
                "Tax strategy",
                "Audit defense",
                "Client advisory",
                "Fraud detection",
                "Complex interpretations",
            ],
            &["Accounting", "Tax Law", "Excel", "Attention to Detail", "Financial Analysis"],
            &["TurboTax", "QuickBooks AI", "Xero automation", "Sage AI"],
            [0.6, 0.7, 0.4, 0.5, 0.3],
        ),
        occupation(
            "high_school_teacher",
            "High School Teacher",
            21.3,
            "25-2031.00",
            &[
                "Grading multiple choice",
                "Attendance tracking",
                "Lesson planning templates",
                "Basic feedback",
            ],
            &[
                "Classroom management",
                "Mentoring students",
                "Adapting to learning styles",
                "Inspiring curiosity",
            ],
            &["Pedagogy", "Subject Expertise", "Communication", "Patience", "Motivation"],
            &["Khan Academy", "ChatGPT tutors", "Automated grading systems", "Coursera AI"],
            [0.3, 0.5, 0.85, 0.8, 0.75],
        ),
        occupation(
            "electrician",
            "Electrician",
            34.6,
            "47-2111.00",
            &[
                "Circuit testing",
                "Code compliance checks",
                "Wire sizing calculations",
                "Load calculations",
            ],
            &[
                "Troubleshooting complex issues",
                "Custom installations",
                "Emergency repairs",
                "Tight space work",
            ],
            &[
                "Electrical Systems",
                "Problem Solving",
                "Manual Dexterity",
                "Safety Protocols",
                "Blueprint Reading",
            ],
            &[
                "Smart home automation",
                "Modular wiring systems",
                "Diagnostic robots",
                "Self-installing fixtures",
            ],
            [0.4, 0.3, 0.7, 0.6, 0.5],
        ),
        occupation(
            "graphic_designer",
            "Graphic Designer",
            52.7,
            "27-1024.00",
            &[
                "Logo variations",
                "Social media templates",
                "Image resizing",
                "Color palette generation",
            ],
            &[
                "Brand strategy",
                "Client vision translation",
                "Creative direction",
                "Conceptual thinking",
            ],
            &[
                "Adobe Creative Suite",
                "Typography",
                "Visual Communication",
                "Creativity",
                "Brand Design",
            ],
            &["Midjourney", "Canva AI", "Adobe Firefly", "Looka", "DALL-E 3"],
            [0.7, 0.6, 0.7, 0.5, 0.6],
        ),
        occupation(
            "paralegal",
            "Paralegal",
            69.4,
            "23-2011.00",
            &[
                "Document review",
                "Legal research",
                "Contract drafting",
                "Case file organization",
                "Precedent searches",
            ],
            &[
                "Client interviews",
                "Court strategy",
                "Witness preparation",
                "Complex case analysis",
            ],
            &[
                "Legal Research",
                "Writing",
                "Organization",
                "Attention to Detail",
                "Legal Procedures",
            ],
            &["CaseText", "ROSS Intelligence", "LegalZoom AI", "Harvey AI"],
            [0.6, 0.7, 0.5, 0.6, 0.4],
        ),
        occupation(
            "construction_manager",
            "Construction Manager",
            28.9,
            "11-9021.00",
            &["Scheduling", "Budget tracking", "Progress reporting", "Material ordering"],
            &[
                "On-site problem solving",
                "Contractor negotiation",
                "Safety enforcement",
                "Crisis management",
            ],
            &[
                "Project Management",
                "Construction Knowledge",
                "Leadership",
                "Negotiation",
                "Risk Assessment",
            ],
            &["Procore AI", "Construction robots", "BIM automation", "Drone inspections"],
            [0.4, 0.5, 0.7, 0.7, 0.6],
        ),
        occupation(
            "pharmacist",
            "Pharmacist",
            55.1,
            "29-1051.00",
            &[
                "Prescription filling",
                "Dosage verification",
                "Drug interaction checks",
                "Inventory management",
            ],
            &[
                "Clinical consultations",
                "Immunizations",
                "Complex medication therapy management",
                "Patient counseling",
            ],
            &[
                "Pharmacology",
                "Patient Counseling",
                "Attention to Detail",
                "Healthcare Knowledge",
                "Clinical Skills",
            ],
            &[
                "Automated dispensing",
                "AI drug interaction checkers",
                "PillPack",
                "Amazon Pharmacy",
            ],
            [0.5, 0.6, 0.7, 0.7, 0.5],
        ),
        occupation(
            "real_estate_agent",
            "Real Estate Agent",
            47.3,
            "41-9022.00",
            &[
                "Property listings",
                "Market analysis",
                "Showing scheduling",
                "Document prep",
                "Comps research",
            ],
            &[
                "Negotiation",
                "Client relationship building",
                "Local market expertise",
                "Deal troubleshooting",
            ],
            &["Sales", "Negotiation", "Local Knowledge", "Communication", "Market Analysis"],
            &["Zillow AI", "Redfin automation", "Virtual showing platforms", "OpenDoor"],
            [0.5, 0.4, 0.7, 0.8, 0.6],
        ),
        occupation(
            "translator",
            "Translator",
            68.2,
            "27-3091.00",
            &[
                "Document translation",
                "Subtitle generation",
                "Basic interpretation",
                "Glossary creation",
            ],
            &[
                "Cultural nuance",
                "Literary translation",
                "Real-time negotiation interpretation",
                "Idiomatic expressions",
            ],
            &[
                "Multilingual",
                "Cultural Knowledge",
                "Writing",
                "Attention to Detail",
                "Language Expertise",
            ],
            &["Google Translate", "DeepL", "GPT-4 multilingual", "Whisper AI"],
            [0.7, 0.6, 0.5, 0.6, 0.4],
        ),
        occupation(
            "social_worker",
            "Social Worker",
            15.7,
            "21-1021.00",
            &[
                "Case documentation",
                "Resource database searches",
                "Appointment reminders",
                "Form processing",
            ],
            &[
                "Crisis intervention",
                "Family mediation",
                "Advocacy",
                "Building trust with vulnerable populations",
            ],
            &[
                "Empathy",
                "Crisis Management",
                "Communication",
                "Social Services Knowledge",
                "Cultural Competence",
            ],
            &["Case management software", "Chatbot resource finders", "Automated screening tools"],
            [0.2, 0.3, 0.9, 0.85, 0.8],
        ),
        occupation(
            "plumber",
            "Plumber",
            31.2,
            "47-2152.02",
            &[
                "Pipe sizing calculations",
                "Code lookups",
                "Leak detection with sensors",
                "System diagnostics",
            ],
            &[
                "Emergency repairs",
                "Custom installations",
                "Navigating tight spaces",
                "Client problem diagnosis",
            ],
            &[
                "Plumbing Systems",
                "Problem Solving",
                "Manual Dexterity",
                "Physical Stamina",
                "Troubleshooting",
            ],
            &[
                "Smart leak detectors",
                "Self-diagnosing fixtures",
                "Plumbing robots",
                "Automated valve systems",
            ],
            [0.3, 0.3, 0.7, 0.6, 0.5],
        ),
        occupation(
            "chef",
            "Chef",
            38.4,
            "35-1011.00",
            &["Recipe scaling", "Inventory tracking", "Basic prep work", "Temperature monitoring"],
            &["Recipe creation", "Flavor balancing", "Presentation", "Managing kitchen chaos"],
            &[
                "Culinary Technique",
                "Creativity",
                "Leadership",
                "Time Management",
                "Taste Development",
            ],
            &[
                "Automated cooking machines",
                "Recipe AI",
                "Robotic prep stations",
                "Flippy (burger robot)",
            ],
            [0.4, 0.5, 0.7, 0.6, 0.7],
        ),
        occupation(
            "marketing_manager",
            "Marketing Manager",
            41.8,
            "11-2021.00",
            &["Social media scheduling", "Email campaigns", "A/B testing", "Analytics reporting"],
            &["Brand strategy", "Creative direction", "Stakeholder management", "Market intuition"],
            &["Marketing Strategy", "Analytics", "Creativity", "Leadership", "Communication"],
            &["HubSpot AI", "Jasper.ai", "Automated ad platforms", "GPT-4 copywriting"],
            [0.6, 0.7, 0.7, 0.7, 0.6],
        ),
        occupation(
            "lawyer",
            "Lawyer",
            39.2,
            "23-1011.00",
            &["Legal research", "Contract review", "Document drafting", "Case precedent searches"],
            &["Courtroom performance", "Client strategy", "Negotiation", "Jury persuasion"],
            &[
                "Legal Expertise",
                "Critical Thinking",
                "Argumentation",
                "Client Relations",
                "Strategy",
            ],
            &["Harvey AI", "CaseText", "LexisNexis AI", "DoNotPay"],
            [0.5, 0.7, 0.7, 0.8, 0.6],
        ),
        occupation(
            "journalist",
            "Journalist",
            56.9,
            "27-3022.00",
            &["Earnings reports", "Sports recaps", "Weather updates", "Data summarization"],
            &[
                "Investigative reporting",
                "Interview skills",
                "Source cultivation",
                "Editorial judgment",
            ],
            &["Writing", "Research", "Interviewing", "Ethics", "Critical Thinking"],
            &[
                "GPT-4 journalism",
                "Automated news bots",
                "Quill by Narrative Science",
                "AI summarizers",
            ],
            [0.6, 0.7, 0.6, 0.7, 0.5],
        ),
        occupation(
            "physical_therapist",
            "Physical Therapist",
            19.8,
            "29-1123.00",
            &[
                "Exercise tracking",
                "Progress measurement",
                "Basic diagnostics",
                "Treatment scheduling",
            ],
            &["Manual therapy", "Treatment customization", "Patient motivation", "Pain assessment"],
            &[
                "Anatomy Knowledge",
                "Manual Therapy",
                "Patient Care",
                "Assessment",
                "Rehabilitation",
            ],
            &[
                "VR therapy platforms",
                "Robotic rehab devices",
                "AI treatment plans",
                "Exoskeleton systems",
            ],
            [0.3, 0.4, 0.85, 0.8, 0.75],
        ),
        occupation(
            "automotive_mechanic",
            "Automotive Mechanic",
            49.3,
            "49-3023.00",
            &["Diagnostic scans", "Oil changes", "Brake pad replacement", "Tire rotation"],
            &[
                "Complex troubleshooting",
                "Custom repairs",
                "Customer communication",
                "Weird noises diagnosis",
            ],
            &[
                "Automotive Systems",
                "Problem Solving",
                "Manual Dexterity",
                "Tool Use",
                "Diagnostics",
            ],
            &[
                "Diagnostic AI",
                "Predictive maintenance systems",
                "Tesla self-service",
                "OBD-II automation",
            ],
            [0.5, 0.4, 0.6, 0.6, 0.5],
        ),
        occupation(
            "hr_manager",
            "HR Manager",
            44.6,
            "11-3121.00",
            &[
                "Resume screening",
                "Interview scheduling",
                "Benefits administration",
                "Onboarding paperwork",
            ],
            &[
                "Conflict resolution",
                "Culture building",
                "Sensitive investigations",
                "Retention strategy",
            ],
            &[
                "People Management",
                "Communication",
                "Conflict Resolution",
                "Labor Law",
                "Emotional Intelligence",
            ],
            &["LinkedIn Recruiter AI", "HireVue automation", "Workday AI", "BambooHR"],
            [0.5, 0.6, 0.8, 0.7, 0.6],
        ),
        occupation(
            "financial_advisor",
            "Financial Advisor",
            58.3,
            "13-2052.00",
            &[
                "Portfolio rebalancing",
                "Tax optimization",
                "Retirement calculations",
                "Risk assessment",
            ],
            &[
                "Client relationship management",
                "Behavioral coaching",
                "Estate planning",
                "Complex financial situations",
            ],
            &[
                "Financial Planning",
                "Client Relations",
                "Investment Knowledge",
                "Communication",
                "Trust Building",
            ],
            &["Betterment", "Wealthfront", "Vanguard robo-advisors", "GPT-4 financial planning"],
            [0.6, 0.7, 0.7, 0.7, 0.5],
        ),
        occupation(
            "copywriter",
            "Copywriter",
            64.1,
            "27-3043.00",
            &["Product descriptions", "SEO content", "Email templates", "Social media posts"],
            &[
                "Brand voice development",
                "Creative campaigns",
                "Emotional storytelling",
                "Cultural relevance",
            ],
            &["Writing", "Creativity", "Marketing", "Persuasion", "Brand Understanding"],
            &["ChatGPT", "Jasper.ai", "Copy.ai", "Claude", "Writesonic"],
            [0.7, 0.7, 0.6, 0.6, 0.5],
        ),
    ]
}
