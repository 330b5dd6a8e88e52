//! Static keyword table for the chat assistant.
//!
//! An ordered list of (keyword, response, emoji) records. Order matters:
//! when two matching keywords have the same length, the earlier entry wins,
//! so reordering entries is a behavior change.

/// One canned response, selected when `keyword` appears as a substring of
/// the (lowercased) user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordEntry {
    pub keyword: &'static str,
    pub response: &'static str,
    pub emoji: &'static str,
}

/// Returned when nothing in [`RESPONSES`] matches. A friendly redirect,
/// never an error.
pub static FALLBACK: KeywordEntry = KeywordEntry {
    keyword: "",
    response: "That's a great question! While I may not have a specific answer for that, here are some things I can help with:\n\n\
        • **Cycle phases** — Understanding menstrual, follicular, ovulation, and luteal phases\n\
        • **Symptoms** — Managing cramps, headaches, fatigue, bloating\n\
        • **Emotions** — Mood changes, anxiety, stress during your cycle\n\
        • **Lifestyle** — Exercise, diet, sleep, and hydration tips\n\
        • **Self-care** — Phase-specific wellness strategies\n\n\
        Try asking me about any of these topics! I'm here to support your wellness journey. ❤️",
    emoji: "💡",
};

/// The full response table, in its original insertion order.
pub static RESPONSES: &[KeywordEntry] = &[
    // Symptoms
    KeywordEntry {
        keyword: "cramp",
        response: "Cramps are very common during menstruation, caused by uterine contractions. Here are some evidence-based remedies:\n\n\
            🔥 **Heat therapy** — A warm compress on your lower abdomen relaxes muscles\n\
            💊 **Ibuprofen** can reduce prostaglandins (the chemicals causing cramps)\n\
            🧘 **Gentle yoga** — Cat-cow and child's pose are especially helpful\n\
            🍵 **Ginger or chamomile tea** have natural anti-inflammatory properties\n\n\
            If cramps are severe and affect daily life, please consult a healthcare provider.",
        emoji: "💪",
    },
    KeywordEntry {
        keyword: "headache",
        response: "Hormonal headaches are common during your cycle, especially during the menstrual and late luteal phases when estrogen drops.\n\n\
            💧 **Stay well hydrated** — dehydration worsens headaches\n\
            😴 **Prioritize sleep** — aim for 7-9 hours\n\
            🧊 **Cold compress** on your temples or forehead\n\
            🍫 **Magnesium-rich foods** like dark chocolate and nuts may help\n\n\
            If headaches are persistent or severe, consider tracking them alongside your cycle to share with your doctor.",
        emoji: "🩹",
    },
    KeywordEntry {
        keyword: "bloat",
        response: "Bloating is a very common PMS symptom caused by hormonal changes that affect water retention and digestion.\n\n\
            🥗 **Reduce salt intake** — excess sodium increases water retention\n\
            🚶 **Light walking** helps move things through your digestive system\n\
            🍵 **Peppermint tea** can ease bloating and gas\n\
            💧 **Drink more water** — counterintuitive, but it helps reduce retention\n\
            🍌 **Potassium-rich foods** like bananas help balance sodium levels",
        emoji: "🌿",
    },
    KeywordEntry {
        keyword: "pain",
        response: "Pain during your cycle can range from mild discomfort to severe cramping. Here are some general tips:\n\n\
            🔥 **Heat pads** are one of the most effective natural remedies\n\
            🛀 **Warm baths** can relax your entire body\n\
            💊 **Anti-inflammatory medication** (NSAIDs) if appropriate\n\
            🧘 **Stretching and light exercise** release endorphins\n\n\
            ⚠️ If pain is debilitating or unusual, please see a healthcare provider — conditions like endometriosis deserve medical attention.",
        emoji: "❤️‍🩹",
    },
    KeywordEntry {
        keyword: "nausea",
        response: "Nausea during your period is caused by prostaglandins — the same chemicals that cause cramps.\n\n\
            🍋 **Ginger** in any form (tea, candied, fresh) is a proven anti-nausea remedy\n\
            🍞 **Small, bland meals** are easier on your stomach\n\
            🌬️ **Fresh air** — step outside for a few minutes\n\
            💧 **Sip water slowly** — avoid gulping\n\n\
            If nausea is severe or accompanied by vomiting, consult your doctor.",
        emoji: "🍋",
    },
    // Moods & emotions
    KeywordEntry {
        keyword: "tired",
        response: "Feeling tired is completely normal! During the late luteal phase, your progesterone levels peak and then start to drop, which can significantly impact your energy. 🍵\n\n\
            😴 **Extra rest** — listen to your body and sleep more if you can\n\
            💧 **Hydrate well** — fatigue is often linked to dehydration\n\
            🥬 **Iron-rich foods** — leafy greens, lentils, and lean meats\n\
            ☕ **Moderate caffeine** is okay, but don't overdo it\n\n\
            This tiredness is temporary and your body's way of asking for care.",
        emoji: "😴",
    },
    KeywordEntry {
        keyword: "fatigue",
        response: "Fatigue is one of the most commonly reported symptoms across all cycle phases. Your body is doing incredible work!\n\n\
            🛌 **Prioritize rest** — it's not laziness, it's self-care\n\
            🥜 **B-vitamin rich foods** — eggs, nuts, and whole grains boost energy\n\
            🏃 **Light exercise** — even a 10-minute walk can improve energy levels\n\
            🧘 **Deep breathing exercises** can reduce mental fatigue\n\n\
            Your energy will cycle back up — usually during the follicular phase!",
        emoji: "✨",
    },
    KeywordEntry {
        keyword: "mood",
        response: "Mood changes throughout your cycle are completely normal and tied to hormonal fluctuations:\n\n\
            📊 **Menstrual phase** — may feel introspective and lower energy\n\
            🌱 **Follicular phase** — rising estrogen brings optimism and creativity\n\
            ☀️ **Ovulation** — peak confidence and social energy\n\
            🌙 **Luteal phase** — progesterone can bring irritability or anxiety\n\n\
            💡 **Tip:** Track your moods alongside your cycle to identify your personal patterns. Knowledge is power!",
        emoji: "🌈",
    },
    KeywordEntry {
        keyword: "anxiety",
        response: "Anxiety during your cycle is more common than you might think, especially during the luteal phase when progesterone drops.\n\n\
            🫁 **Box breathing** — inhale 4s, hold 4s, exhale 4s, hold 4s\n\
            🧘 **Grounding exercises** — name 5 things you can see, 4 you can touch...\n\
            🚫 **Limit caffeine** — it can amplify anxiety\n\
            📝 **Journal** — writing your thoughts can externalize worries\n\
            🤗 **Reach out** — talk to your Inner Circle or a trusted friend\n\n\
            If anxiety is overwhelming, please don't hesitate to seek professional support. You deserve help. ❤️",
        emoji: "💙",
    },
    KeywordEntry {
        keyword: "stress",
        response: "Stress and your cycle are deeply interconnected — stress can even affect your cycle length!\n\n\
            🛀 **Self-care rituals** — baths, skincare, anything that soothes you\n\
            🌳 **Nature time** — even 20 minutes outdoors reduces cortisol\n\
            🧘 **Meditation** — apps like Calm or Headspace are great starters\n\
            🍵 **Adaptogenic teas** — ashwagandha or chamomile\n\
            📵 **Digital detox** — put your phone down for a bit\n\n\
            Remember: managing stress isn't selfish, it's essential. 💛",
        emoji: "🧘",
    },
    KeywordEntry {
        keyword: "irritab",
        response: "Irritability during PMS is caused by the drop in estrogen and progesterone before your period. You're not \"being difficult\" — it's biochemistry!\n\n\
            🏃 **Physical activity** releases endorphins that counteract irritability\n\
            🍫 **Complex carbs** help boost serotonin (whole grains, sweet potatoes)\n\
            🛌 **Sleep** — irritability worsens with poor sleep\n\
            📣 **Communicate** — let people close to you know you need extra patience\n\n\
            Being aware of these patterns is the first step to managing them. You're doing great! 💪",
        emoji: "💪",
    },
    KeywordEntry {
        keyword: "sad",
        response: "It's okay to feel sad, especially during hormonal shifts in your cycle. Your feelings are valid.\n\n\
            🤗 **Connect** with someone — your Inner Circle is here for you\n\
            🌞 **Sunlight exposure** — helps boost serotonin naturally\n\
            🎵 **Music** — uplifting playlists can shift your mood\n\
            📝 **Gratitude journaling** — list 3 things you're thankful for\n\
            🍫 **Dark chocolate** — yes, it actually helps! (in moderation)\n\n\
            Remember: this feeling will pass. You are strong and cyclical. 🌸",
        emoji: "🌸",
    },
    // Cycle phases
    KeywordEntry {
        keyword: "luteal",
        response: "The **Luteal Phase** is the second half of your cycle (after ovulation, before your period).\n\n\
            📊 **What happens:** Progesterone rises to prepare for potential pregnancy, then drops if no implantation occurs\n\
            😴 **Energy:** Often lower, especially in the late luteal phase\n\
            🍽️ **Cravings:** Carbs and chocolate cravings are normal!\n\
            💆 **Self-care:** Prioritize rest, warm foods, and gentle movement\n\n\
            ⚡ **Tip:** This is your body's \"winding down\" phase. Honor it instead of pushing through. Planning lighter schedules during this time can make a big difference.",
        emoji: "🌙",
    },
    KeywordEntry {
        keyword: "follicular",
        response: "The **Follicular Phase** starts after your period ends and lasts until ovulation.\n\n\
            📊 **What happens:** Estrogen rises, follicles develop in your ovaries\n\
            ⚡ **Energy:** Increasing! You'll likely feel more energetic and motivated\n\
            🧠 **Brain:** Better focus and creativity\n\
            🏋️ **Exercise:** Great time for high-intensity workouts\n\
            🎯 **Productivity:** Take on new projects and set goals\n\n\
            💡 **Tip:** This is your \"spring\" phase — plant seeds for the month ahead!",
        emoji: "🌱",
    },
    KeywordEntry {
        keyword: "ovulation",
        response: "**Ovulation** is when an egg is released from your ovary, typically around day 14 of a 28-day cycle.\n\n\
            📊 **What happens:** LH surges, egg is released, fertility peaks\n\
            ⚡ **Energy:** At its highest!\n\
            🗣️ **Social:** You may feel more confident and communicative\n\
            💪 **Exercise:** Peak performance time\n\
            🌡️ **Body temp:** Slight rise after ovulation\n\n\
            🔴 **Fertility:** This is your most fertile window (usually 3-5 days around ovulation).\n\n\
            💡 **Tip:** This is your \"summer\" phase — shine bright!",
        emoji: "☀️",
    },
    KeywordEntry {
        keyword: "menstrual",
        response: "The **Menstrual Phase** is when your period occurs (typically days 1-5).\n\n\
            📊 **What happens:** The uterine lining sheds as hormone levels drop\n\
            😴 **Energy:** Usually at its lowest\n\
            🔴 **Flow:** Can vary from light to heavy\n\
            💆 **Self-care:** Rest, warmth, and comfort foods\n\
            🧘 **Movement:** Gentle walks or stretching are ideal\n\n\
            💡 **Tip:** This is your \"winter\" phase — a time for rest and reflection. Don't push yourself too hard!",
        emoji: "❄️",
    },
    KeywordEntry {
        keyword: "period",
        response: "Your period is part of the menstrual phase — the beginning of a new cycle!\n\n\
            📆 **Average length:** 3-7 days is normal\n\
            🩸 **Flow changes:** Usually heavier on days 2-3, then lighter\n\
            🛁 **Comfort:** Warm baths, heating pads, and comfortable clothes\n\
            🍎 **Nutrition:** Iron-rich foods help replenish what you lose\n\
            💊 **Pain relief:** NSAIDs work best when taken early\n\n\
            Remember: your period is a vital sign of health. Tracking it helps you understand your body better! ❤️",
        emoji: "🔴",
    },
    KeywordEntry {
        keyword: "phase",
        response: "Your menstrual cycle has **4 main phases**, each with unique characteristics:\n\n\
            ❄️ **Menstrual** (Days 1-5) — Period, lowest energy, rest phase\n\
            🌱 **Follicular** (Days 6-13) — Rising energy, creativity, new beginnings\n\
            ☀️ **Ovulation** (Days 14-16) — Peak energy, confidence, fertility\n\
            🌙 **Luteal** (Days 17-28) — Winding down, self-care, reflection\n\n\
            Understanding your phases helps you plan your life around your natural rhythms! Ask me about any specific phase to learn more.",
        emoji: "🔄",
    },
    KeywordEntry {
        keyword: "cycle",
        response: "Your **menstrual cycle** is the monthly process your body goes through to prepare for potential pregnancy.\n\n\
            📊 **Average length:** 21-35 days (28 is just an average!)\n\
            🔄 **4 phases:** Menstrual → Follicular → Ovulation → Luteal\n\
            📈 **Hormones involved:** Estrogen, progesterone, FSH, LH\n\n\
            Every person's cycle is unique. Tracking yours helps you understand your body's own rhythm. Would you like to know about a specific phase?",
        emoji: "📊",
    },
    // Lifestyle
    KeywordEntry {
        keyword: "exercise",
        response: "Exercise affects and is affected by your cycle! Here's a phase-by-phase guide:\n\n\
            ❄️ **Menstrual:** Gentle walks, stretching, yoga\n\
            🌱 **Follicular:** Ramp up! Try running, cycling, HIIT\n\
            ☀️ **Ovulation:** Peak performance — go for PRs!\n\
            🌙 **Luteal:** Moderate exercise, Pilates, swimming\n\n\
            🔑 **Key:** Listen to your body. If you're exhausted, rest IS productive. Movement should feel good, not forced.\n\n\
            💡 Regular exercise can actually reduce PMS symptoms by up to 30%!",
        emoji: "🏃",
    },
    KeywordEntry {
        keyword: "sleep",
        response: "Sleep needs change throughout your cycle:\n\n\
            😴 **Menstrual phase:** You may need more sleep (aim for 8-9 hours)\n\
            🌱 **Follicular:** Sleep is usually easier, energy is good\n\
            ☀️ **Ovulation:** You might feel you need less sleep\n\
            🌙 **Luteal:** Sleep quality often decreases due to progesterone\n\n\
            💤 **Sleep hygiene tips:**\n\
            • Keep a consistent schedule\n\
            • Cool, dark room (65-68°F)\n\
            • No screens 1 hour before bed\n\
            • Magnesium supplements may help during luteal phase",
        emoji: "😴",
    },
    KeywordEntry {
        keyword: "diet",
        response: "Nutrition plays a huge role in how you feel during your cycle!\n\n\
            ❄️ **Menstrual:** Iron-rich foods (spinach, lentils), warm soups\n\
            🌱 **Follicular:** Light, fresh foods, fermented items (probiotics)\n\
            ☀️ **Ovulation:** Anti-inflammatory foods, raw veggies, quinoa\n\
            🌙 **Luteal:** Complex carbs (sweet potatoes), magnesium (dark chocolate!)\n\n\
            🚫 **Reduce:** Excess salt (bloating), caffeine (anxiety), alcohol (sleep disruption)\n\
            ✅ **Always:** Stay hydrated, eat regularly, don't skip meals",
        emoji: "🥗",
    },
    KeywordEntry {
        keyword: "water",
        response: "Hydration is CRUCIAL for managing cycle symptoms!\n\n\
            💧 **Aim for 2-3 liters daily** — even more during your period\n\
            🩸 **During menstruation:** You lose fluids, so increase intake\n\
            🥤 **Electrolytes:** Add a pinch of salt or drink coconut water\n\
            🍵 **Herbal teas count!** — Ginger, chamomile, and peppermint are great\n\n\
            ⚠️ **Signs of dehydration:** Headaches, fatigue, darker urine, dizziness\n\n\
            Many period symptoms (headaches, cramps, fatigue) are worsened by dehydration. A glass of water can be surprisingly effective!",
        emoji: "💧",
    },
    KeywordEntry {
        keyword: "hydrat",
        response: "Great question about hydration! 💧\n\n\
            Staying hydrated helps with SO many cycle symptoms:\n\
            • Reduces headaches\n\
            • Eases cramps\n\
            • Reduces bloating (yes, more water = less bloating!)\n\
            • Improves energy and focus\n\n\
            🎯 **Goal:** 8-10 glasses per day, more during your period\n\
            🍵 **Fun options:** Infused water, herbal tea, coconut water\n\n\
            Try keeping a water bottle with you throughout the day!",
        emoji: "💧",
    },
    KeywordEntry {
        keyword: "pms",
        response: "**PMS (Premenstrual Syndrome)** affects up to 75% of menstruating people. You're definitely not alone!\n\n\
            📊 **Common symptoms:** Bloating, mood swings, breast tenderness, fatigue, irritability, food cravings\n\
            📅 **When:** Usually 1-2 weeks before your period (late luteal phase)\n\n\
            🛠️ **Management strategies:**\n\
            • Regular exercise (reduces symptoms by ~30%)\n\
            • Calcium supplements (1200mg daily reduces PMS)\n\
            • B6 vitamins help with mood symptoms\n\
            • Reduce salt, caffeine, and alcohol\n\
            • Prioritize sleep\n\n\
            If PMS significantly impacts your life, consult a healthcare provider — treatments are available!",
        emoji: "🩺",
    },
    // General & support
    KeywordEntry {
        keyword: "help",
        response: "I'm here to help! Here are some things you can ask me about:\n\n\
            🔴 **Cycle phases** — \"Tell me about the luteal phase\"\n\
            😊 **Mood & emotions** — \"Why am I feeling tired?\"\n\
            💊 **Symptoms** — \"How to reduce cramps?\"\n\
            🏃 **Lifestyle** — \"Exercise tips for my cycle\"\n\
            🥗 **Nutrition** — \"Diet tips during period\"\n\
            💧 **Hydration** — \"How much water should I drink?\"\n\
            🧘 **Self-care** — \"Stress management tips\"\n\n\
            Just type naturally — I understand keywords and will give you relevant, evidence-based information! ❤️",
        emoji: "💡",
    },
    KeywordEntry {
        keyword: "hello",
        response: "Hi there! 👋 Welcome to your Cycora AI Companion. I'm here to help you understand your cycle, manage symptoms, and feel empowered about your health.\n\n\
            What would you like to know today? You can ask about:\n\
            • Your current phase\n\
            • Symptom management\n\
            • Lifestyle tips\n\
            • Or just chat about how you're feeling!\n\n\
            I'm all ears (well, all algorithms 😄)!",
        emoji: "❤️",
    },
    KeywordEntry {
        keyword: "thank",
        response: "You're so welcome! 🤗 I'm always here whenever you need support, information, or just someone to talk to about your cycle.\n\n\
            Remember: understanding your body is an act of self-love. You're doing amazing by being proactive about your health! 💪\n\n\
            Feel free to come back anytime! ❤️",
        emoji: "🌸",
    },
    KeywordEntry {
        keyword: "self-care",
        response: "Self-care during your cycle isn't luxury — it's ESSENTIAL! Here's a phase-by-phase guide:\n\n\
            ❄️ **Menstrual:** Warm baths, cozy blankets, journaling, gentle yoga\n\
            🌱 **Follicular:** Try new things, socialize, creative projects\n\
            ☀️ **Ovulation:** Dress up, connect with friends, tackle big tasks\n\
            🌙 **Luteal:** Wind down, skincare routine, reading, early bedtimes\n\n\
            🎯 **Daily non-negotiables:**\n\
            • 5 minutes of deep breathing\n\
            • One glass of water upon waking\n\
            • Moving your body in any way that feels good\n\n\
            You deserve care in every phase. 💛",
        emoji: "💛",
    },
    KeywordEntry {
        keyword: "acne",
        response: "Hormonal acne is closely tied to your cycle!\n\n\
            📊 **When it happens:** Usually during the late luteal phase and early menstrual phase, when progesterone rises and then estrogen drops\n\n\
            🛠️ **What helps:**\n\
            • Gentle, non-comedogenic skincare\n\
            • Avoid touching your face\n\
            • Zinc supplements may help\n\
            • Stay hydrated\n\
            • Green tea (anti-inflammatory)\n\
            • Consistent sleep schedule\n\n\
            💡 **Tip:** Track your breakouts alongside your cycle to identify your personal pattern. If acne is severe, a dermatologist can help with hormonal treatments.",
        emoji: "✨",
    },
    KeywordEntry {
        keyword: "weight",
        response: "Weight fluctuations during your cycle are completely NORMAL!\n\n\
            📊 **What to expect:**\n\
            • **Menstrual:** Slight decrease as water retention drops\n\
            • **Follicular:** Stable, good time to focus on fitness goals\n\
            • **Ovulation:** May feel leaner\n\
            • **Luteal:** Can gain 2-5 lbs from water retention!\n\n\
            💡 **Remember:**\n\
            • This is water weight, NOT fat gain\n\
            • It will naturally resolve\n\
            • Don't change your diet drastically based on scale numbers\n\
            • Focus on how you FEEL, not what the scale says\n\n\
            Your body is cyclical, and so is your weight. That's perfectly healthy! 💪",
        emoji: "⚖️",
    },
    KeywordEntry {
        keyword: "friend",
        response: "Having supportive friends during your cycle makes a huge difference! 👭\n\n\
            Cycora's **Inner Circle** feature lets you:\n\
            • Connect up to 10 trusted friends\n\
            • Optionally share your cycle phase (with privacy controls)\n\
            • Receive care and check-ins during tough phases\n\
            • Send support to friends who need it\n\n\
            💡 **Tips for being a supportive friend:**\n\
            • Check in during their late luteal/menstrual phase\n\
            • Don't dismiss their feelings as \"just hormones\"\n\
            • Offer practical help (soup delivery, a walk together)\n\
            • Just listen — sometimes that's enough\n\n\
            You can manage your sharing preferences in Settings! 🔐",
        emoji: "👭",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_keywords_are_lowercase_and_nonempty() {
        for entry in RESPONSES {
            assert!(!entry.keyword.is_empty());
            assert_eq!(entry.keyword, entry.keyword.to_lowercase());
            assert!(!entry.response.is_empty());
        }
    }

    #[test]
    fn table_keywords_are_unique() {
        for (i, a) in RESPONSES.iter().enumerate() {
            for b in &RESPONSES[i + 1..] {
                assert_ne!(a.keyword, b.keyword);
            }
        }
    }

    #[test]
    fn fallback_matches_nothing() {
        // Empty keyword means the fallback can never win a substring scan;
        // it is only ever returned explicitly.
        assert!(FALLBACK.keyword.is_empty());
    }
}
