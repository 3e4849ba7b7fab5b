use crate::types::{AnalysisRecord, SentimentSlice, Topic};

/// Built-in record returned in sample mode, so the report can be previewed
/// without a webhook.
pub fn sample_record() -> AnalysisRecord {
    AnalysisRecord {
        title: "The Future of Artificial Intelligence in 2025".to_string(),
        thumbnail_url: "https://picsum.photos/800/450".to_string(),
        summary: "This video explores the rapid evolution of AI agents, the shift from LLMs to \
                  action-oriented models, and the ethical implications of autonomous systems. \
                  The speaker emphasizes the importance of human-in-the-loop systems while \
                  predicting a massive surge in productivity tools driven by generative AI."
            .to_string(),
        description: "This video provides a comprehensive overview of the state of Artificial \
                      Intelligence in 2025. It begins by analyzing the shift from Large Language \
                      Models (LLMs) to autonomous agents that can execute actions. The presenter \
                      argues that while LLMs were about information retrieval, the new wave of AI \
                      is about task execution.\n\n\
                      Furthermore, the video delves into the hardware constraints that might \
                      impede the scaling laws observed in the past decade. With Moore's Law \
                      slowing down, specialized AI chips are becoming the new gold standard. The \
                      discussion includes a detailed breakdown of the energy requirements for \
                      next-generation models and how sustainable energy sources are becoming \
                      critical for data centers.\n\n\
                      Finally, the ethical dimensions are discussed, particularly focusing on the \
                      need for 'human-in-the-loop' frameworks for critical decision-making \
                      processes in healthcare and finance. The speaker concludes with a 5-year \
                      roadmap for enterprise AI adoption."
            .to_string(),
        key_points: vec![
            "Shift from passive LLMs to active autonomous agents.".to_string(),
            "Ethical considerations regarding AI decision-making in healthcare.".to_string(),
            "The rise of personalized AI tutors for global education.".to_string(),
            "Productivity gains estimated at 40% for knowledge workers.".to_string(),
            "Hardware limitations potentially slowing down scaling laws.".to_string(),
        ],
        topics: vec![
            Topic::new("Autonomous Agents", 95.0),
            Topic::new("Generative AI", 88.0),
            Topic::new("Ethics", 75.0),
            Topic::new("Hardware", 60.0),
            Topic::new("Education", 50.0),
        ],
        insights: vec![
            "AI is moving beyond chat to executing complex multi-step workflows.".to_string(),
            "Data privacy will become the primary differentiator for enterprise AI adoption."
                .to_string(),
            "Open source models are closing the gap with proprietary frontier models.".to_string(),
        ],
        sentiment: vec![
            SentimentSlice::new("Positive", 65.0),
            SentimentSlice::new("Neutral", 20.0),
            SentimentSlice::new("Negative", 15.0),
        ],
    }
}
