use crate::health::BmiCategory;
use crate::history::UserRecord;

fn contains_any(question: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| question.contains(n))
}

fn napfa_answer(record: &UserRecord) -> String {
    match record.latest_napfa() {
        Some(latest) => {
            let weak: Vec<&str> = latest
                .grades
                .below(3)
                .into_iter()
                .map(|s| s.name())
                .collect();
            if weak.is_empty() {
                format!(
                    "Great NAPFA scores! Your total is {} points. To maintain or improve: \
                     (1) Keep training all components weekly, (2) Focus on explosive power \
                     for jumps, (3) Mix steady runs with sprints, (4) Don't neglect \
                     flexibility!",
                    latest.total
                )
            } else {
                format!(
                    "Based on your latest NAPFA test, you need work on: {}. Run \
                     `fittrack coach workouts` for specific exercises. Focus on \
                     consistency: train each weak area 3-4x per week.",
                    weak.join(", ")
                )
            }
        }
        None => "Complete a NAPFA test first so I can give you personalized advice! \
                 Once you do, I'll analyze your weak areas and suggest a specific plan."
            .to_string(),
    }
}

fn weight_answer(record: &UserRecord) -> String {
    match record.latest_bmi() {
        Some(latest) => match latest.category {
            BmiCategory::Normal => format!(
                "Your BMI is {:.1} (Normal range). To maintain: eat balanced meals, \
                 exercise 4-5x/week, stay hydrated. Focus on building strength and \
                 endurance rather than weight change!",
                latest.bmi
            ),
            BmiCategory::Underweight => "To gain healthy weight: (1) Eat 5-6 small meals \
                 daily, (2) Focus on protein + complex carbs, (3) Strength train 3-4x/week, \
                 (4) Drink smoothies with banana, oats, peanut butter. Run `fittrack coach \
                 meals` for specific foods!"
                .to_string(),
            BmiCategory::Overweight | BmiCategory::Obesity => "For healthy weight loss: \
                 (1) Create a small calorie deficit (200-300 cal), (2) Eat lean protein + \
                 veggies each meal, (3) Do cardio 4-5x/week, (4) Avoid sugary drinks. Run \
                 `fittrack coach meals` for a detailed plan!"
                .to_string(),
        },
        None => "Calculate your BMI first! Then I can give you personalized nutrition \
                 and training advice for your goals."
            .to_string(),
    }
}

fn sleep_answer(record: &UserRecord) -> String {
    match record.average_sleep_hours() {
        Some(avg) if avg >= 8.0 => format!(
            "Your sleep is excellent at {:.1} hours! Keep it consistent. If still \
             tired: check iron levels, reduce screen time before bed, and ensure \
             quality sleep (dark, cool room).",
            avg
        ),
        Some(avg) => format!(
            "You're averaging {:.1} hours - you need 8-10 hours as a teen! Tips: \
             (1) Set a bedtime alarm, (2) No screens 1hr before bed, (3) Same sleep \
             schedule daily, (4) Avoid caffeine after 2pm.",
            avg
        ),
        None => "Track your sleep for a few days first! Then I can analyze your \
                 patterns and give specific advice. Teenagers need 8-10 hours for \
                 optimal performance and recovery."
            .to_string(),
    }
}

/// Answer a free-text question from static templates, personalised with the
/// user's own records where they exist. Keyword matching is deliberate: no
/// learned behaviour, just the rule table.
pub fn coach_response(question: &str, record: &UserRecord) -> String {
    let q = question.to_lowercase();

    if contains_any(&q, &["napfa", "pull", "sit up", "sit-up", "run"]) {
        napfa_answer(record)
    } else if contains_any(&q, &["weight", "bmi", "lose", "gain"]) {
        weight_answer(record)
    } else if contains_any(&q, &["sleep", "tired", "energy"]) {
        sleep_answer(record)
    } else if contains_any(&q, &["strength", "muscle", "strong"]) {
        "To build strength: (1) Focus on compound exercises (push-ups, pull-ups, \
         squats), (2) Progressive overload - increase difficulty weekly, (3) Eat \
         protein after workouts, (4) Rest 48hrs between training the same muscles, \
         (5) Start with bodyweight, add resistance gradually."
            .to_string()
    } else if contains_any(&q, &["cardio", "endurance", "stamina"]) {
        "Build endurance with: (1) Start at a comfortable pace - able to talk while \
         running, (2) Gradually increase distance by 10% weekly, (3) Mix steady runs \
         (30-45min) with intervals (sprint 1min, jog 2min x 8), (4) Cross-train with \
         swimming/cycling, (5) Stay hydrated! Aim for 3-4 cardio sessions weekly."
            .to_string()
    } else if contains_any(&q, &["eat", "food", "diet", "meal"]) {
        "For athletic performance: (1) Eat breakfast within 1hr of waking, (2) Balance \
         each meal: lean protein + complex carbs + vegetables, (3) Pre-workout: banana \
         + peanut butter, (4) Post-workout: protein + carbs within 1hr, (5) Stay \
         hydrated - 8-10 glasses daily, (6) Limit processed foods and sugar."
            .to_string()
    } else if contains_any(&q, &["recover", "sore", "rest"]) {
        "Recovery is crucial! (1) Sleep 8-10 hours, (2) Eat protein within 1hr \
         post-workout, (3) Stay hydrated, (4) Active recovery: light walk/swim on \
         rest days, (5) Stretch daily, (6) Ice sore muscles, (7) Rest 1-2 full \
         days/week. Muscle soreness 24-48hrs after a workout is normal (DOMS)!"
            .to_string()
    } else if contains_any(&q, &["motivat", "give up", "hard"]) {
        "Stay motivated! (1) Set small, achievable goals, (2) Track progress - \
         celebrate small wins, (3) Find a workout buddy, (4) Mix up your routine to \
         stay interested, (5) Remember your 'why', (6) Progress isn't linear - some \
         weeks are tough, (7) Focus on how you FEEL, not just numbers. You've got this!"
            .to_string()
    } else if contains_any(&q, &["stretch", "flexib"]) {
        "Improve flexibility: (1) Stretch AFTER workouts when muscles are warm, \
         (2) Hold each stretch 30-60 seconds, (3) Never bounce, (4) Stretch daily - \
         even on rest days, (5) Focus on hamstrings, hip flexors, shoulders, (6) Try \
         yoga 1-2x/week, (7) Breathe deeply while stretching."
            .to_string()
    } else if contains_any(&q, &["injur", "pain", "hurt"]) {
        "If you have pain (not soreness): (1) STOP that activity immediately, \
         (2) Rest and ice the area, (3) See a doctor/physiotherapist if pain \
         persists, (4) Don't train through pain - it makes injuries worse. \
         Prevention: warm up properly, increase intensity gradually, use proper \
         form, rest adequately. Your health comes first!"
            .to_string()
    } else {
        "I can help with: NAPFA training, strength building, cardio/endurance, \
         nutrition/meals, weight management, sleep optimization, recovery, \
         flexibility, injury prevention, and motivation! Try asking about any of \
         these topics. What specific aspect of fitness would you like to know about?"
            .to_string()
    }
}
