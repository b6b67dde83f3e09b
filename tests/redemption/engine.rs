use perks::{
    catalog::{
        CHAMPIONS_LEAGUE_FINAL_TICKET, KARAOKE_PRO_MICROPHONE,
        PIRATES_OF_THE_CARRIBEAN_COLLECTION, Reward,
    },
    eligibility::{FailingEligibility, StaticEligibility},
    redemption::RedemptionEngine,
};

use crate::{account, portfolio};

#[test]
fn given_invalid_account_number_when_redeeming_then_flag_is_set_and_rewards_are_empty() {
    let engine = RedemptionEngine::with_defaults();

    let redemption = engine.redeem(
        &FailingEligibility::invalid_account_number(),
        &account(),
        &portfolio(&["SPORTS"]),
    );

    assert!(redemption.rewards.is_empty());
    assert!(redemption.invalid_account_number);
}

#[test]
fn given_technical_failure_when_redeeming_then_rewards_are_empty_and_no_flag_is_set() {
    let engine = RedemptionEngine::with_defaults();

    let redemption = engine.redeem(
        &FailingEligibility::technical_failure(),
        &account(),
        &portfolio(&["SPORTS", "MUSIC"]),
    );

    assert!(redemption.rewards.is_empty());
    assert!(!redemption.invalid_account_number);
}

#[test]
fn given_ineligible_customer_when_redeeming_then_rewards_are_empty() {
    let engine = RedemptionEngine::with_defaults();

    let redemption = engine.redeem(
        &StaticEligibility::ineligible(),
        &account(),
        &portfolio(&["SPORTS", "MUSIC", "MOVIES"]),
    );

    assert!(redemption.rewards.is_empty());
    assert!(!redemption.invalid_account_number);
}

#[test]
fn given_sports_subscription_when_eligible_then_final_ticket_is_granted() {
    let engine = RedemptionEngine::with_defaults();

    let redemption = engine.redeem(
        &StaticEligibility::eligible(),
        &account(),
        &portfolio(&["SPORTS"]),
    );

    assert_eq!(
        redemption.rewards,
        vec![Reward::new(CHAMPIONS_LEAGUE_FINAL_TICKET)],
    );
}

#[test]
fn given_music_subscription_when_eligible_then_karaoke_microphone_is_granted() {
    let engine = RedemptionEngine::with_defaults();

    let redemption = engine.redeem(
        &StaticEligibility::eligible(),
        &account(),
        &portfolio(&["MUSIC"]),
    );

    assert_eq!(redemption.rewards, vec![Reward::new(KARAOKE_PRO_MICROPHONE)]);
}

#[test]
fn given_movies_subscription_when_eligible_then_pirates_collection_is_granted() {
    let engine = RedemptionEngine::with_defaults();

    let redemption = engine.redeem(
        &StaticEligibility::eligible(),
        &account(),
        &portfolio(&["MOVIES"]),
    );

    assert_eq!(
        redemption.rewards,
        vec![Reward::new(PIRATES_OF_THE_CARRIBEAN_COLLECTION)],
    );
}

#[test]
fn given_sports_and_music_subscriptions_when_eligible_then_both_rewards_are_granted_in_order() {
    let engine = RedemptionEngine::with_defaults();

    let redemption = engine.redeem(
        &StaticEligibility::eligible(),
        &account(),
        &portfolio(&["SPORTS", "MUSIC"]),
    );

    assert_eq!(
        redemption.rewards,
        vec![
            Reward::new(CHAMPIONS_LEAGUE_FINAL_TICKET),
            Reward::new(KARAOKE_PRO_MICROPHONE),
        ],
    );
}

#[test]
fn given_all_promotional_subscriptions_when_eligible_then_all_three_rewards_are_granted() {
    let engine = RedemptionEngine::with_defaults();

    let redemption = engine.redeem(
        &StaticEligibility::eligible(),
        &account(),
        &portfolio(&["SPORTS", "MUSIC", "MOVIES"]),
    );

    assert_eq!(
        redemption.rewards,
        vec![
            Reward::new(CHAMPIONS_LEAGUE_FINAL_TICKET),
            Reward::new(KARAOKE_PRO_MICROPHONE),
            Reward::new(PIRATES_OF_THE_CARRIBEAN_COLLECTION),
        ],
    );
}

#[test]
fn given_only_channels_without_rewards_when_eligible_then_rewards_are_empty() {
    let engine = RedemptionEngine::with_defaults();

    let redemption = engine.redeem(
        &StaticEligibility::eligible(),
        &account(),
        &portfolio(&["NEWS", "KIDS"]),
    );

    assert!(redemption.rewards.is_empty());
    assert!(!redemption.invalid_account_number);
}

#[test]
fn given_duplicate_subscription_when_eligible_then_its_reward_is_duplicated() {
    let engine = RedemptionEngine::with_defaults();

    let redemption = engine.redeem(
        &StaticEligibility::eligible(),
        &account(),
        &portfolio(&["SPORTS", "SPORTS"]),
    );

    assert_eq!(
        redemption.rewards,
        vec![
            Reward::new(CHAMPIONS_LEAGUE_FINAL_TICKET),
            Reward::new(CHAMPIONS_LEAGUE_FINAL_TICKET),
        ],
    );
}

#[test]
fn given_unknown_channel_mixed_into_subscriptions_when_eligible_then_known_rewards_keep_their_order()
{
    let engine = RedemptionEngine::with_defaults();

    let redemption = engine.redeem(
        &StaticEligibility::eligible(),
        &account(),
        &portfolio(&["SPORTS", "INVALID_CHANNEL", "MUSIC"]),
    );

    assert_eq!(
        redemption.rewards,
        vec![
            Reward::new(CHAMPIONS_LEAGUE_FINAL_TICKET),
            Reward::new(KARAOKE_PRO_MICROPHONE),
        ],
    );
}

#[test]
fn given_identical_inputs_when_redeeming_twice_then_results_are_identical() {
    let engine = RedemptionEngine::with_defaults();
    let eligibility = StaticEligibility::eligible();
    let account = account();
    let portfolio = portfolio(&["SPORTS", "MUSIC"]);

    let first = engine.redeem(&eligibility, &account, &portfolio);
    let second = engine.redeem(&eligibility, &account, &portfolio);

    assert_eq!(first, second);
}
