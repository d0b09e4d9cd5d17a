// ==========================================
// 包装产线SPC监控系统 - 小时采样引擎
// ==========================================
// 职责: 按产线统计模型生成单小时合成观测
// 输入: 产线参数 + sigma + 显式随机源
// 输出: Observation (产量/缺陷数/缺陷率)
// ==========================================
// 模型: 产量 ~ Normal(μ, sigma·μ) 取整并截断为非负
//       缺陷 ~ Poisson(λ = 缺陷率均值 × 当小时产量), 截断至产量
// ==========================================

use crate::domain::line::Line;
use crate::domain::observation::Observation;
use rand::Rng;
use rand_distr::{Distribution, Normal, Poisson};

// ==========================================
// HourlySampler - 小时采样引擎
// ==========================================
pub struct HourlySampler {
    // 无状态引擎,随机源由调用方显式传入
}

impl HourlySampler {
    pub fn new() -> Self {
        Self {}
    }

    /// 生成单产线单小时观测
    ///
    /// # 参数
    /// - `line`: 产线 (提供小时均值产量与均值缺陷率)
    /// - `hour`: 小时序号 (1起始)
    /// - `sigma`: 产量方差参数 (>= 0)
    /// - `rng`: 显式随机源句柄 (可复现性要求,禁止隐式全局状态)
    ///
    /// # 保证
    /// 每次调用为独立抽样; 0 <= defect_count <= production_count
    pub fn generate<R: Rng + ?Sized>(
        &self,
        line: &Line,
        hour: u64,
        sigma: f64,
        rng: &mut R,
    ) -> Observation {
        let production_count = self.sample_production(line, sigma, rng);
        let defect_count = self.sample_defects(line, production_count, rng);

        let observation = Observation::new(hour, production_count, defect_count);
        tracing::debug!(
            line = %line.name,
            hour,
            production = observation.production_count,
            defects = observation.defect_count,
            rate = observation.defect_rate,
            "生成小时观测"
        );

        observation
    }

    /// 产量抽样: Normal(μ, sigma·μ),负值截断为0
    fn sample_production<R: Rng + ?Sized>(&self, line: &Line, sigma: f64, rng: &mut R) -> u64 {
        let mean = line.hourly_production_mean();
        let std_dev = sigma * mean;

        // sigma=0 时退化为常数抽样
        let draw = match Normal::new(mean, std_dev) {
            Ok(normal) => normal.sample(rng),
            Err(_) => mean,
        };

        if draw <= 0.0 {
            0
        } else {
            draw.round() as u64
        }
    }

    /// 缺陷抽样: Poisson(λ = 均值缺陷率 × 当小时产量),截断至产量
    fn sample_defects<R: Rng + ?Sized>(
        &self,
        line: &Line,
        production_count: u64,
        rng: &mut R,
    ) -> u64 {
        let lambda = line.hourly_defect_rate_mean() * production_count as f64;

        // λ <= 0 (零产量或零缺陷率) 时无缺陷可抽
        if lambda <= 0.0 {
            return 0;
        }

        let draw = match Poisson::new(lambda) {
            Ok(poisson) => poisson.sample(rng),
            Err(_) => 0.0,
        };

        (draw as u64).min(production_count)
    }
}

impl Default for HourlySampler {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_line() -> Line {
        Line::new("First Exterior", 800_000, 11_000).unwrap()
    }

    #[test]
    fn test_observation_invariants_hold_over_many_draws() {
        let sampler = HourlySampler::new();
        let line = test_line();
        let mut rng = StdRng::seed_from_u64(42);

        for hour in 1..=1_000 {
            let obs = sampler.generate(&line, hour, 0.3, &mut rng);
            assert!(obs.defect_count <= obs.production_count);
            assert!((0.0..=1.0).contains(&obs.defect_rate));
        }
    }

    #[test]
    fn test_zero_sigma_yields_mean_production() {
        let sampler = HourlySampler::new();
        let line = test_line();
        let mut rng = StdRng::seed_from_u64(7);

        // sigma=0: 产量恒为均值取整 (800000/730 ≈ 1096)
        let obs = sampler.generate(&line, 1, 0.0, &mut rng);
        assert_eq!(obs.production_count, 1096);
    }

    #[test]
    fn test_zero_defect_line_never_produces_defects() {
        let sampler = HourlySampler::new();
        let line = Line::new("Perfect Line", 730_000, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        for hour in 1..=200 {
            let obs = sampler.generate(&line, hour, 0.1, &mut rng);
            assert_eq!(obs.defect_count, 0);
            assert_eq!(obs.defect_rate, 0.0);
        }
    }

    #[test]
    fn test_seeded_rng_reproduces_identical_sequence() {
        let sampler = HourlySampler::new();
        let line = test_line();

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);

        for hour in 1..=50 {
            let a = sampler.generate(&line, hour, 0.03, &mut rng_a);
            let b = sampler.generate(&line, hour, 0.03, &mut rng_b);
            assert_eq!(a.production_count, b.production_count);
            assert_eq!(a.defect_count, b.defect_count);
        }
    }

    #[test]
    fn test_poisson_defects_within_three_sigma_coverage() {
        // 统计性质: production=1100 时 λ ≈ 0.01375×1100 ≈ 15.1,
        // Poisson 方差 = λ,3σ 覆盖率应 >= 99% (10000次抽样)
        let line = test_line();
        let sampler = HourlySampler::new();
        let mut rng = StdRng::seed_from_u64(20_260_827);

        let lambda = line.hourly_defect_rate_mean() * 1100.0;
        let three_sigma = 3.0 * lambda.sqrt();
        let trials = 10_000;

        let mut within = 0usize;
        for _ in 0..trials {
            let defects = sampler.sample_defects(&line, 1100, &mut rng) as f64;
            if (defects - lambda).abs() <= three_sigma {
                within += 1;
            }
        }

        let coverage = within as f64 / trials as f64;
        assert!(
            coverage >= 0.99,
            "3σ 覆盖率不足: {:.4} (期望 >= 0.99)",
            coverage
        );
    }
}
