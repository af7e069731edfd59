pub mod configuration;

pub mod interval {
    pub mod intervalerror;
    pub mod shape;
    pub mod interval;
    pub mod operand;
    pub mod parser;
}

pub mod set {
    pub mod setrelation;
}

pub mod arithmetic {
    pub mod signcase;
    pub mod operators;
    pub mod multiplication;
    pub mod division;
    pub mod power;
}

pub mod trigonometry {
    pub mod casetable;
    pub mod sine;
    pub mod cosine;
    pub mod tangent;
}

pub mod subdivision {
    pub mod subdivision;
}
