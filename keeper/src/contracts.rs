use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }

    #[sol(rpc)]
    interface IPodManager {
        function freeStkAave(address pod) external returns (bool);
        function processReserve() external returns (bool);
        function getPodList() external view returns (address[] memory);
        function isPodLiquidable(address pod) external view returns (bool);
        function liquidatePod(address pod) external returns (bool);
    }

    #[sol(rpc)]
    interface IDullahanVault {
        function updateStkAaveRewards() external;
        function deposit(uint256 assets, address receiver) external returns (uint256);
    }
}
