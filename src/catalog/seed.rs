//! Seed data for the read-only catalogs.

use super::{GroupStatus, Mentor, MentorStatus, Resource, ResourceType, SupportGroup};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn mentors() -> Vec<Mentor> {
    vec![
        Mentor {
            id: "mentor-priya".to_string(),
            name: "Priya S.".to_string(),
            age: 24,
            status: MentorStatus::Active,
            expertise: tags(&["academic_stress", "family_expectations"]),
            interests: tags(&["music", "journaling"]),
            availability: "Weekday evenings".to_string(),
            bio: "Survived three rounds of board exams and a very loud household. \
                  Happy to talk through grade pressure and family conversations."
                .to_string(),
        },
        Mentor {
            id: "mentor-daniel".to_string(),
            name: "Daniel O.".to_string(),
            age: 27,
            status: MentorStatus::Active,
            expertise: tags(&["cultural_identity", "relationships"]),
            interests: tags(&["football", "cooking"]),
            availability: "Weekends".to_string(),
            bio: "Grew up between two cultures and spent years figuring out which \
                  parts of each were mine. Ask me anything."
                .to_string(),
        },
        Mentor {
            id: "mentor-amara".to_string(),
            name: "Amara K.".to_string(),
            age: 25,
            status: MentorStatus::Active,
            expertise: tags(&["mental_health", "school_pressure"]),
            interests: tags(&["yoga", "painting"]),
            availability: "Tuesday and Thursday evenings".to_string(),
            bio: "Peer-support trained listener focused on anxiety and burnout in \
                  final-year students."
                .to_string(),
        },
        Mentor {
            id: "mentor-wei".to_string(),
            name: "Wei L.".to_string(),
            age: 26,
            status: MentorStatus::Active,
            expertise: tags(&["future_anxiety", "academic_stress"]),
            interests: tags(&["board games", "hiking"]),
            availability: "Sunday afternoons".to_string(),
            bio: "Changed career paths twice before finding one that fit. Good at \
                  talking through what-comes-next panic."
                .to_string(),
        },
        Mentor {
            id: "mentor-sofia".to_string(),
            name: "Sofia R.".to_string(),
            age: 29,
            status: MentorStatus::Inactive,
            expertise: tags(&["relationships", "mental_health"]),
            interests: tags(&["reading"]),
            availability: "On sabbatical".to_string(),
            bio: "Taking a break from mentoring this season.".to_string(),
        },
    ]
}

pub fn support_groups() -> Vec<SupportGroup> {
    vec![
        SupportGroup {
            id: "group-exam-season".to_string(),
            name: "Exam Season Circle".to_string(),
            status: GroupStatus::Open,
            focus_areas: tags(&["academic_stress", "school_pressure"]),
            age_range: "15-19".to_string(),
            meeting_schedule: "Wednesdays 18:00".to_string(),
            meeting_format: "video".to_string(),
            current_members: 9,
            max_members: 12,
            description: "Weekly check-ins for anyone buried under coursework and \
                          exam timetables."
                .to_string(),
        },
        SupportGroup {
            id: "group-between-worlds".to_string(),
            name: "Between Worlds".to_string(),
            status: GroupStatus::Open,
            focus_areas: tags(&["cultural_identity", "family_expectations"]),
            age_range: "16-22".to_string(),
            meeting_schedule: "First Saturday of the month".to_string(),
            meeting_format: "in-person".to_string(),
            current_members: 14,
            max_members: 14,
            description: "A space for people balancing home culture and the one \
                          outside the front door."
                .to_string(),
        },
        SupportGroup {
            id: "group-quiet-minds".to_string(),
            name: "Quiet Minds".to_string(),
            status: GroupStatus::Open,
            focus_areas: tags(&["mental_health", "future_anxiety"]),
            age_range: "18-25".to_string(),
            meeting_schedule: "Mondays 19:30".to_string(),
            meeting_format: "video".to_string(),
            current_members: 6,
            max_members: 10,
            description: "Low-pressure peer group for anxiety, overthinking, and \
                          everything adjacent."
                .to_string(),
        },
        SupportGroup {
            id: "group-first-gen".to_string(),
            name: "First-Gen Futures".to_string(),
            status: GroupStatus::Closed,
            focus_areas: tags(&["family_expectations", "academic_stress"]),
            age_range: "17-21".to_string(),
            meeting_schedule: "Paused until next term".to_string(),
            meeting_format: "hybrid".to_string(),
            current_members: 11,
            max_members: 11,
            description: "For first-generation students carrying the whole family's \
                          plans. Currently between cohorts."
                .to_string(),
        },
    ]
}

pub fn resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "res-exam-breathing".to_string(),
            title: "Five-Minute Breathing Reset Before Exams".to_string(),
            resource_type: ResourceType::Guide,
            categories: tags(&["academic_stress", "mental_health"]),
            tags: tags(&["breathing", "exams", "stress"]),
            difficulty: "beginner".to_string(),
            read_time_minutes: 5,
            description: "A short guided routine to settle exam-hall stress before \
                          it spirals."
                .to_string(),
        },
        Resource {
            id: "res-family-talks".to_string(),
            title: "Talking to Your Family About Grades".to_string(),
            resource_type: ResourceType::Article,
            categories: tags(&["family_expectations", "academic_stress"]),
            tags: tags(&["family", "communication"]),
            difficulty: "beginner".to_string(),
            read_time_minutes: 8,
            description: "Scripts and framing for hard conversations about report \
                          cards and expectations."
                .to_string(),
        },
        Resource {
            id: "res-identity-map".to_string(),
            title: "Cultural Identity Mapping Worksheet".to_string(),
            resource_type: ResourceType::Worksheet,
            categories: tags(&["cultural_identity"]),
            tags: tags(&["identity", "reflection"]),
            difficulty: "intermediate".to_string(),
            read_time_minutes: 20,
            description: "A structured exercise for naming the values you keep, \
                          adapt, and leave behind."
                .to_string(),
        },
        Resource {
            id: "res-study-planner".to_string(),
            title: "Realistic Study Planner".to_string(),
            resource_type: ResourceType::Tool,
            categories: tags(&["academic_stress", "school_pressure"]),
            tags: tags(&["planning", "school"]),
            difficulty: "beginner".to_string(),
            read_time_minutes: 10,
            description: "A weekly planner template that budgets rest instead of \
                          pretending you have none."
                .to_string(),
        },
        Resource {
            id: "res-burnout-signs".to_string(),
            title: "Recognizing Burnout Early".to_string(),
            resource_type: ResourceType::Video,
            categories: tags(&["mental_health"]),
            tags: tags(&["school_pressure", "burnout"]),
            difficulty: "beginner".to_string(),
            read_time_minutes: 12,
            description: "What it looks like when motivation loss is a warning sign, \
                          and how to reduce burnout before it deepens."
                .to_string(),
        },
        Resource {
            id: "res-anxiety-toolkit".to_string(),
            title: "Everyday Anxiety Toolkit".to_string(),
            resource_type: ResourceType::Guide,
            categories: tags(&["mental_health", "future_anxiety"]),
            tags: tags(&["anxiety", "coping", "stress"]),
            difficulty: "intermediate".to_string(),
            read_time_minutes: 15,
            description: "Grounding techniques and thought-record templates for \
                          anxious weeks."
                .to_string(),
        },
        Resource {
            id: "res-boundaries".to_string(),
            title: "Setting Boundaries Without Burning Bridges".to_string(),
            resource_type: ResourceType::Article,
            categories: tags(&["relationships", "family_expectations"]),
            tags: tags(&["boundaries", "family"]),
            difficulty: "intermediate".to_string(),
            read_time_minutes: 9,
            description: "How to say no to people you love and still be at dinner \
                          on Sunday."
                .to_string(),
        },
        Resource {
            id: "res-career-panic".to_string(),
            title: "What If I Pick the Wrong Path?".to_string(),
            resource_type: ResourceType::Video,
            categories: tags(&["future_anxiety"]),
            tags: tags(&["careers", "decisions"]),
            difficulty: "beginner".to_string(),
            read_time_minutes: 14,
            description: "Three alumni on choosing, un-choosing, and surviving the \
                          decision anyway."
                .to_string(),
        },
    ]
}
